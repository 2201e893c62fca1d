//! Sources of die rolls.
//!
//! Workers roll through the [`DrawSource`] trait so the random generator can
//! be swapped for a fixed script in tests. Production workers each own a
//! [`RngDraws`] over a `SmallRng` seeded from OS entropy, so no two workers
//! share a stream and runs are not reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SimulationError;

/// Produces die faces in `0..sides`.
pub trait DrawSource {
    /// Overwrite `out` with independent rolls of a `sides`-sided die.
    fn fill_draws(&mut self, sides: u8, out: &mut [u8]);
}

/// Uniform die rolls from any `rand` generator.
#[derive(Clone)]
pub struct RngDraws<R> {
    rng: R,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDraws<SmallRng> {
    /// Seed a fresh generator from the operating system for `worker`.
    pub fn from_os_entropy(worker: usize) -> Result<Self, SimulationError> {
        SmallRng::try_from_os_rng()
            .map(Self::new)
            .map_err(|e| SimulationError::EntropyUnavailable {
                worker,
                reason: e.to_string(),
            })
    }

    /// Reproducible generator, for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    #[inline(always)]
    fn fill_draws(&mut self, sides: u8, out: &mut [u8]) {
        for d in out.iter_mut() {
            *d = self.rng.random_range(0..sides);
        }
    }
}

/// Replays a fixed sequence of faces, wrapping around at the end.
///
/// `sides` is ignored: the script is returned verbatim.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    script: Vec<u8>,
    pos: usize,
}

impl ScriptedDraws {
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "draw script must not be empty");
        Self { script, pos: 0 }
    }

    /// Number of faces handed out so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl DrawSource for ScriptedDraws {
    fn fill_draws(&mut self, _sides: u8, out: &mut [u8]) {
        for d in out.iter_mut() {
            *d = self.script[self.pos % self.script.len()];
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_deterministic() {
        let mut a = RngDraws::seeded(42);
        let mut b = RngDraws::seeded(42);
        let mut buf_a = [0u8; 100];
        let mut buf_b = [0u8; 100];
        a.fill_draws(4, &mut buf_a);
        b.fill_draws(4, &mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_draw_range() {
        let mut src = RngDraws::seeded(12345);
        let mut buf = [0u8; 231];
        for _ in 0..1000 {
            src.fill_draws(4, &mut buf);
            for &d in &buf {
                assert!(d < 4, "Face out of range: {}", d);
            }
        }
    }

    #[test]
    fn test_draw_distribution() {
        let mut src = RngDraws::seeded(42);
        let mut counts = [0u64; 4];
        let mut buf = [0u8; 1000];
        let n = 400;
        for _ in 0..n {
            src.fill_draws(4, &mut buf);
            for &d in &buf {
                counts[d as usize] += 1;
            }
        }
        // Each face should be ~1/4 of 400000
        let expected = (n * buf.len()) as f64 / 4.0;
        for (face, &count) in counts.iter().enumerate() {
            let ratio = count as f64 / expected;
            assert!(
                ratio > 0.98 && ratio < 1.02,
                "Face {} has count {} (expected ~{:.0}, ratio {:.3})",
                face,
                count,
                expected,
                ratio
            );
        }
    }

    #[test]
    fn test_os_entropy_available() {
        assert!(RngDraws::from_os_entropy(0).is_ok());
    }

    #[test]
    fn test_scripted_wraps() {
        let mut src = ScriptedDraws::new(vec![0, 1, 2]);
        let mut buf = [9u8; 7];
        src.fill_draws(4, &mut buf);
        assert_eq!(buf, [0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(src.consumed(), 7);
    }
}
