//! Monte Carlo search for the best paralysis-turn battle.
//!
//! - [`draws`]: Die-roll sources (OS-seeded `SmallRng`, scripted replays)
//! - [`trial`]: One worker's batch of battles with early exit
//! - [`partition`]: Contiguous split of the battle budget across workers
//! - [`coordinator`]: Parallel dispatch, barrier and ordered reduction

pub mod coordinator;
pub mod draws;
pub mod partition;
pub mod trial;

// Re-export commonly used items
pub use coordinator::{
    available_parallelism, check_parallelism, reduce_worker_results, run_simulation,
    run_simulation_with, GlobalResult,
};
pub use draws::{DrawSource, RngDraws, ScriptedDraws};
pub use partition::WorkPartition;
pub use trial::{count_paralysis_turns, roll_trial, simulate_worker, WorkerResult};
