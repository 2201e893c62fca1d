//! Console output of a finished run.
//!
//! The elapsed-time breakdown keeps the historical format of this report:
//! `minutes` is the total number of whole minutes, `hours` the total number
//! of whole hours and `days` the total number of whole days. None of them is
//! reduced into the next unit, while `seconds` is the remainder within the
//! current minute.

use std::fmt;
use std::time::Duration;

use crate::simulation::GlobalResult;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElapsedBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl ElapsedBreakdown {
    pub fn from_duration(elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let minutes = elapsed.as_secs() / 60;
        let hours = minutes / 60;
        let days = hours / 24;
        Self {
            days,
            hours,
            minutes,
            seconds: secs - (minutes * 60) as f64,
        }
    }
}

impl fmt::Display for ElapsedBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time taken: {} days, {} hours, {} minutes and {:.3} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

impl fmt::Display for GlobalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Highest Ones Roll:{}", self.max_streak_count)?;
        write!(f, "Number of Roll Sessions: {}", self.total_rolls)
    }
}
