//! Simulation constants.
//!
//! Every parameter of a run is baked in at build time; the binary takes no
//! arguments and reads no environment. Library callers (and tests) can build a
//! [`SimulationConfig`](crate::config::SimulationConfig) with other values.
//!
//! - total budget = [`TOTAL_TRIALS`] battles
//! - one battle = [`TURNS_PER_TRIAL`] rolls of a [`DIE_SIDES`]-sided die
//! - a turn is paralysed when the die shows [`PARALYSIS_FACE`]
//! - a battle is good enough once it has [`PARALYSIS_TURNS_NEEDED`] paralysed turns

/// Number of battles simulated across all workers.
pub const TOTAL_TRIALS: usize = 1_000_000;

/// Number of parallel workers. Must not exceed the hardware concurrency.
pub const WORKER_COUNT: usize = 20;

/// Die rolls per battle.
pub const TURNS_PER_TRIAL: usize = 231;

/// Faces on the die; each roll is uniform over `0..DIE_SIDES`.
pub const DIE_SIDES: u8 = 4;

/// The face that paralyses the turn.
pub const PARALYSIS_FACE: u8 = 0;

/// Paralysed turns needed in one battle to stop searching.
pub const PARALYSIS_TURNS_NEEDED: usize = 177;

/// Verbosity of the diagnostics written to stderr.
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;
