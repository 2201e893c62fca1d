//! # Graveler — paralysis-turn Monte Carlo
//!
//! Estimates how many of a battle's 231 turns can be lost to paralysis when
//! each turn is a fair roll of a 4-sided die and face 0 paralyses. One
//! million battles are played across 20 workers; the run reports the best
//! battle found and how many battles it took to first reach 177 paralysed
//! turns (the full budget if no battle did).
//!
//! | Stage | Rust module | Description |
//! |-------|-------------|-------------|
//! | 0 | [`config`] | Validate parameters and split the budget ([`simulation::partition`]) |
//! | 1 | [`simulation::coordinator`] | Check hardware concurrency, build a rayon pool of one thread per worker |
//! | 2 | [`simulation::trial`] | Each worker plays its battles with its own OS-seeded `SmallRng`, stopping at the first sufficient battle |
//! | 3 | [`simulation::coordinator::reduce_worker_results`] | Join all workers, fold results in worker-index order |
//! | 4 | [`report`] | Print the result lines and elapsed time |
//!
//! ## Counting
//!
//! A battle's score is the *total* number of paralysed turns, not the longest
//! consecutive run. Battles are rolled in full before scoring, so early exit
//! is per battle.
//!
//! ## Ordering
//!
//! The reported maximum is taken over all workers. The reported roll count
//! belongs to the lowest-indexed worker that reached the threshold,
//! regardless of scheduling or of larger streaks in later workers.

pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::SimulationError;
