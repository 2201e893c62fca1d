//! Splitting the trial budget into contiguous per-worker ranges.
//!
//! Every worker but the last gets `per_worker = ceil(total / workers)` trials;
//! the last gets whatever is left, so the shares always add up to the total
//! and only the final share can be short. Worker `i` covers
//! `offset(i) .. offset(i) + trials_for(i)`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkPartition {
    total_trials: usize,
    workers: usize,
    per_worker: usize,
}

impl WorkPartition {
    pub fn new(total_trials: usize, workers: usize) -> Self {
        Self {
            total_trials,
            workers,
            per_worker: total_trials.div_ceil(workers.max(1)),
        }
    }

    #[inline]
    pub fn total_trials(&self) -> usize {
        self.total_trials
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Nominal share of every worker; the stride between range starts.
    #[inline]
    pub fn per_worker(&self) -> usize {
        self.per_worker
    }

    /// Index of the first trial owned by `worker`.
    #[inline]
    pub fn offset(&self, worker: usize) -> usize {
        self.per_worker * worker
    }

    /// Trials owned by `worker`: `min(per_worker, total - offset)`, saturating at 0.
    #[inline]
    pub fn trials_for(&self, worker: usize) -> usize {
        self.per_worker
            .min(self.total_trials.saturating_sub(self.offset(worker)))
    }

    /// Shares of all workers in index order.
    pub fn shares(&self) -> Vec<usize> {
        (0..self.workers).map(|w| self.trials_for(w)).collect()
    }
}
