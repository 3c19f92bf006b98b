//! Fan-out / fan-in strategy.
//!
//! Every ID is dispatched into a [`JoinSet`] before any result is awaited.
//! Failures never stop the other fetches; all of them are aggregated.
//!
//! Once the token fires the run is `Canceled`, even when every fetch has
//! already settled. Stragglers get the grace period to finish; after that
//! they are aborted and detached, so a fetch stuck in a blocking call
//! cannot hold back the outcome.

use super::FetchPeopleUseCase;
use super::types::{AggregateError, FetchError, FetchOutcome};
use crate::ports::people_source::{PeopleSource, SourceError};
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::shared::race_cancelled;
use roster_domain::{FetchProgress, Person, PersonId};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Dispatch index, person id, fetch result
type FetchTaskOutput = (usize, PersonId, Result<Person, SourceError>);

impl<S: PeopleSource + 'static> FetchPeopleUseCase<S> {
    pub(super) async fn fetch_concurrent(
        &self,
        ids: Vec<PersonId>,
        cancel: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> FetchOutcome {
        let total = ids.len();
        let mut tracker = FetchProgress::new(total);
        let mut join_set: JoinSet<FetchTaskOutput> = JoinSet::new();

        for (index, id) in ids.into_iter().enumerate() {
            if cancel.is_cancelled() {
                debug!("Cancellation observed after {} of {} dispatches", index, total);
                break;
            }
            let source = Arc::clone(&self.source);
            let token = cancel.clone();
            debug!("Dispatching fetch for person {}", id);
            join_set.spawn(async move {
                let result = race_cancelled(&token, source.fetch_person(id, &token)).await;
                (index, id, result)
            });
        }

        let mut slots: Vec<Option<Person>> = vec![None; total];
        let mut errors = Vec::new();

        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    self.drain_after_cancel(&mut join_set).await;
                    return FetchOutcome::Canceled;
                }
                joined = join_set.join_next() => joined,
            };

            let Some(joined) = joined else {
                break;
            };

            match joined {
                Ok((index, _, Ok(person))) => {
                    self.record_success(&person, &mut tracker, progress);
                    slots[index] = Some(person);
                }
                // Cancellation that raced the token; the next select observes it
                Ok((_, _, Err(error))) if error.is_cancelled() && cancel.is_cancelled() => {}
                Ok((_, id, Err(error))) => {
                    self.record_failure(id, &error, progress);
                    errors.push(FetchError::Person { id, source: error });
                }
                Err(join_error) => {
                    warn!("Fetch task did not complete: {}", join_error);
                    errors.push(FetchError::Worker(join_error.to_string()));
                }
            }
        }

        if cancel.is_cancelled() {
            return FetchOutcome::Canceled;
        }

        let people: Vec<Person> = slots.into_iter().flatten().collect();
        match AggregateError::from_errors(errors) {
            Some(errors) => FetchOutcome::Failed {
                errors,
                partial: people,
            },
            None => FetchOutcome::Succeeded(people),
        }
    }

    /// Give in-flight fetches the configured grace period to observe the
    /// token, then abort whatever is left without waiting for it.
    async fn drain_after_cancel(&self, join_set: &mut JoinSet<FetchTaskOutput>) {
        let grace = self.params.cancel_grace;
        info!("Cancelled with {} fetches in flight", join_set.len());

        let drained = tokio::time::timeout(grace, async {
            while join_set.join_next().await.is_some() {}
        })
        .await;

        if drained.is_err() {
            warn!(
                "{} fetches still running after {:?}; aborting",
                join_set.len(),
                grace
            );
            // Aborted tasks stop at their next yield point
            join_set.abort_all();
            join_set.detach_all();
        }
    }
}
