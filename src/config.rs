//! Run parameters for a simulation.
//!
//! The binary always runs [`SimulationConfig::default`], which mirrors
//! [`crate::constants`]. Smaller configs keep tests fast.

use crate::constants::*;
use crate::error::SimulationError;
use crate::simulation::partition::WorkPartition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Battles across all workers.
    pub total_trials: usize,
    /// Parallel workers, each owning one contiguous slice of the battles.
    pub workers: usize,
    /// Die rolls per battle.
    pub turns_per_trial: usize,
    /// Faces on the die.
    pub die_sides: u8,
    /// Paralysed turns in one battle that end the search.
    pub paralysis_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_trials: TOTAL_TRIALS,
            workers: WORKER_COUNT,
            turns_per_trial: TURNS_PER_TRIAL,
            die_sides: DIE_SIDES,
            paralysis_threshold: PARALYSIS_TURNS_NEEDED,
        }
    }
}

impl SimulationConfig {
    /// Reject parameter combinations the simulation cannot run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.total_trials == 0 {
            return Err(invalid("total_trials must be positive"));
        }
        if self.workers == 0 {
            return Err(invalid("workers must be positive"));
        }
        if self.turns_per_trial == 0 {
            return Err(invalid("turns_per_trial must be positive"));
        }
        if self.die_sides < 2 {
            return Err(invalid(format!(
                "die_sides must be at least 2, got {}",
                self.die_sides
            )));
        }
        if self.paralysis_threshold == 0 || self.paralysis_threshold > self.turns_per_trial {
            return Err(invalid(format!(
                "paralysis_threshold must be in 1..={}, got {}",
                self.turns_per_trial, self.paralysis_threshold
            )));
        }
        let partition = self.partition();
        if partition.trials_for(self.workers - 1) == 0 {
            return Err(invalid(format!(
                "{} trials cannot be split over {} workers without idle workers",
                self.total_trials, self.workers
            )));
        }
        Ok(())
    }

    pub fn partition(&self) -> WorkPartition {
        WorkPartition::new(self.total_trials, self.workers)
    }
}

fn invalid(msg: impl Into<String>) -> SimulationError {
    SimulationError::InvalidConfig(msg.into())
}
