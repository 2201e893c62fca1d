//! Trial simulator: one worker's batch of battles.
//!
//! A battle is [`TURNS_PER_TRIAL`](crate::constants::TURNS_PER_TRIAL) die
//! rolls. Its score is the number of rolls showing
//! [`PARALYSIS_FACE`], counted anywhere in the battle rather than as a
//! contiguous run. The whole battle is rolled before it is scored, so the
//! early exit happens between battles, never mid-battle.

use crate::config::SimulationConfig;
use crate::constants::PARALYSIS_FACE;
use crate::simulation::draws::DrawSource;

/// Outcome of one worker's batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkerResult {
    /// Best paralysis count over the battles this worker played.
    pub max_streak_count: usize,
    /// Battles played: up to and including the first that met the
    /// threshold, or the whole batch if none did.
    pub rolls_consumed: usize,
}

impl WorkerResult {
    #[inline]
    pub fn reached(&self, threshold: usize) -> bool {
        self.max_streak_count >= threshold
    }
}

/// Paralysed turns in one battle.
#[inline(always)]
pub fn count_paralysis_turns(draws: &[u8]) -> usize {
    draws.iter().filter(|&&d| d == PARALYSIS_FACE).count()
}

/// Roll a full battle into `buf` and score it.
#[inline(always)]
pub fn roll_trial<S: DrawSource + ?Sized>(source: &mut S, sides: u8, buf: &mut [u8]) -> usize {
    source.fill_draws(sides, buf);
    count_paralysis_turns(buf)
}

/// Play up to `trials` battles, stopping right after the first one that
/// reaches `config.paralysis_threshold`.
pub fn simulate_worker<S: DrawSource + ?Sized>(
    source: &mut S,
    trials: usize,
    config: &SimulationConfig,
) -> WorkerResult {
    let mut buf = vec![0u8; config.turns_per_trial];
    let mut result = WorkerResult {
        max_streak_count: 0,
        rolls_consumed: trials,
    };

    for i in 0..trials {
        let paralysed = roll_trial(source, config.die_sides, &mut buf);

        if paralysed > result.max_streak_count {
            result.max_streak_count = paralysed;
        }

        if paralysed >= config.paralysis_threshold {
            result.rolls_consumed = i + 1;
            break;
        }
    }

    result
}
