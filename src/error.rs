use thiserror::Error;

/// Fatal conditions of a simulation run. None of them are retried.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// More workers were requested than the machine can run at once.
    #[error("number of workers {requested} exceeds maximum of {available} allowed")]
    InsufficientParallelism { requested: usize, available: usize },

    /// A worker could not seed its random number generator.
    #[error("worker {worker} could not obtain a random seed: {reason}")]
    EntropyUnavailable { worker: usize, reason: String },

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
