//! Progress notification port
//!
//! Defines the interface for reporting progress during a fetch run.

use super::people_source::SourceError;
use roster_domain::{FetchMode, Percent, Person, PersonId};

/// Callback for progress updates during a fetch run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, a UI widget).
///
/// All callbacks are invoked from the task driving the run, so a slow
/// implementation stalls the whole run. Implementations must return
/// promptly; marshaling onto a UI thread is their own responsibility.
pub trait ProgressNotifier: Send + Sync {
    /// Called after each successful fetch with the run's completion percentage.
    ///
    /// Values are non-decreasing within a run.
    fn on_progress(&self, percent: Percent);

    /// Called once the ID list is known, before any per-ID fetch starts
    fn on_fetch_start(&self, _total: usize, _mode: FetchMode) {}

    /// Called when a person has been fetched
    fn on_person_fetched(&self, _person: &Person) {}

    /// Called when fetching a person failed
    fn on_person_failed(&self, _id: PersonId, _error: &SourceError) {}

    /// Called when the run has reached its outcome
    fn on_fetch_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_progress(&self, _percent: Percent) {}
}

/// Adapter: plain `Fn(u8)` callback → `ProgressNotifier`
///
/// Receives only the percentage, for callers that need nothing else.
pub struct ProgressCallback<F> {
    callback: F,
}

impl<F> ProgressCallback<F>
where
    F: Fn(u8) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ProgressNotifier for ProgressCallback<F>
where
    F: Fn(u8) + Send + Sync,
{
    fn on_progress(&self, percent: Percent) {
        (self.callback)(percent.value());
    }
}
