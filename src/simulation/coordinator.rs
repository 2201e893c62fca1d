//! Parallel coordinator: split the budget, run every worker, reduce.
//!
//! Workers run on a dedicated rayon pool sized to the worker count. Each one
//! seeds its own generator, plays its contiguous slice of battles and returns
//! a [`WorkerResult`]; the indexed `collect` places that result in the slot
//! for its worker index. Reduction starts only after every worker has
//! returned, and walks the table in index order, so the outcome does not
//! depend on which worker finishes first.

use std::time::Instant;

use rand::rngs::SmallRng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::simulation::draws::{DrawSource, RngDraws};
use crate::simulation::partition::WorkPartition;
use crate::simulation::trial::{simulate_worker, WorkerResult};

/// Reduction of all worker results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalResult {
    /// Best paralysis count seen by any worker.
    pub max_streak_count: usize,
    /// Battles played up to the first sufficient one, counted across the
    /// contiguous worker ranges; the full budget if none was sufficient.
    pub total_rolls: usize,
}

/// Hardware execution units available to this process (1 if unknown).
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub fn check_parallelism(requested: usize, available: usize) -> Result<(), SimulationError> {
    if requested > available {
        return Err(SimulationError::InsufficientParallelism {
            requested,
            available,
        });
    }
    Ok(())
}

/// Run the full simulation with OS-seeded generators, one per worker.
pub fn run_simulation(config: &SimulationConfig) -> Result<GlobalResult, SimulationError> {
    run_simulation_with(
        config,
        available_parallelism(),
        RngDraws::<SmallRng>::from_os_entropy,
    )
}

/// Run the simulation with a caller-supplied source per worker.
///
/// `make_source(worker)` is called on the worker's own thread. Preconditions
/// are checked before the pool is built, so a failing check never samples.
pub fn run_simulation_with<F, S>(
    config: &SimulationConfig,
    available: usize,
    make_source: F,
) -> Result<GlobalResult, SimulationError>
where
    F: Fn(usize) -> Result<S, SimulationError> + Sync,
    S: DrawSource,
{
    config.validate()?;
    check_parallelism(config.workers, available)?;

    let partition = config.partition();
    info!(
        workers = config.workers,
        available,
        trials = config.total_trials,
        per_worker = partition.per_worker(),
        "starting simulation"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("graveler-worker-{i}"))
        .build()?;

    let start = Instant::now();
    let results: Vec<WorkerResult> = pool.install(|| {
        (0..config.workers)
            .into_par_iter()
            .with_max_len(1)
            .map(|worker| {
                let mut source = make_source(worker)?;
                let trials = partition.trials_for(worker);
                let result = simulate_worker(&mut source, trials, config);
                debug!(
                    worker,
                    trials,
                    max = result.max_streak_count,
                    rolls = result.rolls_consumed,
                    early_exit = result.reached(config.paralysis_threshold),
                    "worker finished"
                );
                Ok(result)
            })
            .collect::<Result<Vec<_>, SimulationError>>()
    })?;
    let elapsed = start.elapsed();

    let played: usize = results.iter().map(|r| r.rolls_consumed).sum();
    info!(
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        throughput = played as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
        "all workers joined"
    );

    let global = reduce_worker_results(&results, &partition, config.paralysis_threshold);
    info!(
        max = global.max_streak_count,
        total_rolls = global.total_rolls,
        "reduced worker results"
    );
    Ok(global)
}

/// Fold worker results in index order.
///
/// The maximum covers every worker. The roll count comes from the
/// lowest-indexed worker that reached `threshold`, offset by the start of its
/// range; later qualifying workers do not change it.
pub fn reduce_worker_results(
    results: &[WorkerResult],
    partition: &WorkPartition,
    threshold: usize,
) -> GlobalResult {
    let mut global = GlobalResult {
        max_streak_count: 0,
        total_rolls: partition.total_trials(),
    };
    let mut sufficient_found = false;

    for (worker, result) in results.iter().enumerate() {
        if result.max_streak_count > global.max_streak_count {
            global.max_streak_count = result.max_streak_count;
        }

        if !sufficient_found && result.reached(threshold) {
            global.total_rolls = result.rolls_consumed + partition.offset(worker);
            sufficient_found = true;
        }
    }

    global
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::draws::ScriptedDraws;

    fn wr(max_streak_count: usize, rolls_consumed: usize) -> WorkerResult {
        WorkerResult {
            max_streak_count,
            rolls_consumed,
        }
    }

    #[test]
    fn test_reduce_none_reached() {
        let p = WorkPartition::new(40, 4);
        let results = [wr(3, 10), wr(5, 10), wr(2, 10), wr(4, 10)];
        let g = reduce_worker_results(&results, &p, 6);
        assert_eq!(
            g,
            GlobalResult {
                max_streak_count: 5,
                total_rolls: 40
            }
        );
    }

    #[test]
    fn test_reduce_lowest_index_wins() {
        let p = WorkPartition::new(40, 4);
        // workers 1 and 3 both qualify; 3 has the larger streak
        let results = [wr(3, 10), wr(6, 4), wr(2, 10), wr(9, 1)];
        let g = reduce_worker_results(&results, &p, 6);
        assert_eq!(g.total_rolls, 4 + 10);
        assert_eq!(g.max_streak_count, 9);
    }

    #[test]
    fn test_reduce_first_worker() {
        let p = WorkPartition::new(1_000_000, 20);
        let mut results = vec![wr(100, 50_000); 20];
        results[0] = wr(180, 123);
        let g = reduce_worker_results(&results, &p, 177);
        assert_eq!(g.total_rolls, 123);
        assert_eq!(g.max_streak_count, 180);
    }

    #[test]
    fn test_parallelism_check() {
        assert!(check_parallelism(8, 8).is_ok());
        assert!(check_parallelism(1, 64).is_ok());
        assert!(matches!(
            check_parallelism(20, 8),
            Err(SimulationError::InsufficientParallelism {
                requested: 20,
                available: 8
            })
        ));
    }

    #[test]
    fn test_available_parallelism_positive() {
        assert!(available_parallelism() >= 1);
    }

    #[test]
    fn test_run_scripted_all_qualify() {
        let cfg = SimulationConfig {
            total_trials: 40,
            workers: 4,
            turns_per_trial: 5,
            die_sides: 2,
            paralysis_threshold: 3,
        };
        let g = run_simulation_with(&cfg, 4, |_| Ok(ScriptedDraws::new(vec![0u8, 0, 0, 1, 1])))
            .unwrap();
        assert_eq!(
            g,
            GlobalResult {
                max_streak_count: 3,
                total_rolls: 1
            }
        );
    }

    #[test]
    fn test_entropy_failure_aborts_run() {
        let cfg = SimulationConfig {
            total_trials: 40,
            workers: 4,
            turns_per_trial: 5,
            die_sides: 2,
            paralysis_threshold: 3,
        };
        let err = run_simulation_with(&cfg, 4, |worker| {
            if worker == 2 {
                Err(SimulationError::EntropyUnavailable {
                    worker,
                    reason: "test".into(),
                })
            } else {
                Ok(ScriptedDraws::new(vec![1u8]))
            }
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::EntropyUnavailable { worker: 2, .. }
        ));
    }
}
