//! FetchPeople use case
//!
//! Lists the person IDs once, then fetches every person under the selected
//! [`FetchMode`]. Produces exactly one [`FetchOutcome`] per run.
//!
//! # Precedence
//!
//! A requested cancellation beats failures, and failures beat success.
//! Both modes report `Canceled` when the token fires before the outcome is
//! assembled, even if every fetch has already settled.
//! A source reporting [`SourceError::Cancelled`] while the caller's token
//! is still active is treated as a real failure.

mod concurrent;
mod sequential;
pub mod types;

pub use types::{AggregateError, FetchError, FetchOutcome, FetchPeopleError, FetchPeopleInput};

use crate::config::FetchParams;
use crate::ports::people_source::{PeopleSource, SourceError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::run_logger::{NoRunLogger, RunEvent, RunLogger};
use crate::use_cases::shared::race_cancelled;
use roster_domain::{FetchMode, FetchProgress, Percent, Person, PersonId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Use case for fetching every person from a [`PeopleSource`]
pub struct FetchPeopleUseCase<S: PeopleSource + 'static> {
    source: Arc<S>,
    params: FetchParams,
    run_logger: Arc<dyn RunLogger>,
}

impl<S: PeopleSource + 'static> FetchPeopleUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            params: FetchParams::default(),
            run_logger: Arc::new(NoRunLogger),
        }
    }

    pub fn with_params(mut self, params: FetchParams) -> Self {
        self.params = params;
        self
    }

    /// Set a structured event logger for run lifecycle records
    pub fn with_run_logger(mut self, logger: Arc<dyn RunLogger>) -> Self {
        self.run_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: FetchPeopleInput, cancel: &CancellationToken) -> FetchOutcome {
        self.execute_with_progress(input, cancel, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// `cancel` is owned by the caller; the run only observes it.
    pub async fn execute_with_progress(
        &self,
        input: FetchPeopleInput,
        cancel: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> FetchOutcome {
        info!("Starting {} fetch run", input.mode);
        self.run_logger.log(RunEvent::new(
            "run_started",
            serde_json::json!({ "mode": input.mode.to_string() }),
        ));

        let outcome = self.run(input.mode, cancel, progress).await;

        match &outcome {
            FetchOutcome::Succeeded(people) => info!("Fetched {} people", people.len()),
            FetchOutcome::Canceled => info!("Fetch run cancelled"),
            FetchOutcome::Failed { errors, partial } => warn!(
                "Fetch run failed with {} error(s), {} fetched",
                errors.len(),
                partial.len()
            ),
        }
        self.log_outcome(input.mode, &outcome);
        progress.on_fetch_complete();

        outcome
    }

    async fn run(
        &self,
        mode: FetchMode,
        cancel: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> FetchOutcome {
        if cancel.is_cancelled() {
            debug!("Cancelled before listing ids");
            return FetchOutcome::Canceled;
        }

        let ids = match race_cancelled(cancel, self.source.list_ids(cancel)).await {
            Ok(ids) => ids,
            Err(_) if cancel.is_cancelled() => return FetchOutcome::Canceled,
            Err(e) => {
                warn!("Listing ids failed: {}", e);
                return FetchOutcome::failed(AggregateError::single(FetchError::ListIds(e)));
            }
        };

        info!("Listed {} ids", ids.len());
        self.run_logger.log(RunEvent::new(
            "ids_listed",
            serde_json::json!({ "count": ids.len() }),
        ));
        progress.on_fetch_start(ids.len(), mode);

        if ids.is_empty() {
            progress.on_progress(Percent::COMPLETE);
            return FetchOutcome::Succeeded(Vec::new());
        }

        debug!(
            "Dispatching {} ids ({}, short-circuit: {})",
            ids.len(),
            mode,
            mode.short_circuits()
        );
        match mode {
            FetchMode::Concurrent => self.fetch_concurrent(ids, cancel, progress).await,
            FetchMode::Sequential => self.fetch_sequential(&ids, cancel, progress).await,
        }
    }

    fn record_success(
        &self,
        person: &Person,
        tracker: &mut FetchProgress,
        progress: &dyn ProgressNotifier,
    ) {
        let percent = tracker.record_success();
        debug!("Fetched person {} ({})", person.id(), percent);
        progress.on_person_fetched(person);
        progress.on_progress(percent);
    }

    fn record_failure(
        &self,
        id: PersonId,
        error: &SourceError,
        progress: &dyn ProgressNotifier,
    ) {
        warn!("Fetching person {} failed: {}", id, error);
        progress.on_person_failed(id, error);
        self.run_logger.log(RunEvent::new(
            "person_failed",
            serde_json::json!({
                "id": id.value(),
                "kind": error.kind(),
                "error": error.to_string(),
            }),
        ));
    }

    fn log_outcome(&self, mode: FetchMode, outcome: &FetchOutcome) {
        let payload = match outcome {
            FetchOutcome::Succeeded(people) => serde_json::json!({
                "mode": mode.to_string(),
                "outcome": outcome.label(),
                "fetched": people.len(),
            }),
            FetchOutcome::Canceled => serde_json::json!({
                "mode": mode.to_string(),
                "outcome": outcome.label(),
            }),
            FetchOutcome::Failed { errors, partial } => serde_json::json!({
                "mode": mode.to_string(),
                "outcome": outcome.label(),
                "fetched": partial.len(),
                "errors": errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
            }),
        };
        self.run_logger.log(RunEvent::new("run_finished", payload));
    }
}
