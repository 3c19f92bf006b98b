//! Progress value objects for a fetch run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage in `[0, 100]` (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const COMPLETE: Percent = Percent(100);

    /// Create a percentage, clamping values above 100
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// `floor(completed / total * 100)`, computed in integer arithmetic.
    ///
    /// An empty run (`total == 0`) is complete.
    pub fn of(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self::COMPLETE;
        }
        let pct = (completed.min(total) as u128 * 100) / total as u128;
        Self(pct as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Success counter for a single run.
///
/// The ID-list length fixed at construction is the denominator for every
/// percentage of the run. Only successful fetches are recorded, so a run
/// with failures may never reach 100.
#[derive(Debug, Clone)]
pub struct FetchProgress {
    total: usize,
    completed: usize,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
        }
    }

    /// Record one successful fetch and return the new percentage.
    pub fn record_success(&mut self) -> Percent {
        if self.completed < self.total {
            self.completed += 1;
        }
        self.percent()
    }

    pub fn percent(&self) -> Percent {
        Percent::of(self.completed, self.total)
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_floors() {
        assert_eq!(Percent::of(1, 3).value(), 33);
        assert_eq!(Percent::of(2, 3).value(), 66);
        assert_eq!(Percent::of(3, 3).value(), 100);
        assert_eq!(Percent::of(1, 7).value(), 14);
    }

    #[test]
    fn test_percent_empty_total_is_complete() {
        assert!(Percent::of(0, 0).is_complete());
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(Percent::new(250).value(), 100);
        assert_eq!(Percent::of(5, 3).value(), 100);
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(Percent::new(42).to_string(), "42%");
    }

    #[test]
    fn test_progress_sequence_is_non_decreasing_and_ends_at_100() {
        let mut progress = FetchProgress::new(9);
        let values: Vec<u8> = (0..9).map(|_| progress.record_success().value()).collect();
        assert_eq!(values.len(), 9);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&100));
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn test_progress_does_not_overcount() {
        let mut progress = FetchProgress::new(1);
        progress.record_success();
        progress.record_success();
        assert_eq!(progress.completed(), 1);
        assert!(progress.percent().is_complete());
    }
}
