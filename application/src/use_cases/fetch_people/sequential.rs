//! One-at-a-time strategy in ID-list order, stopping at the first failure.
//!
//! A cancellation that arrives while the last fetch completes still makes
//! the run `Canceled`, the same as the concurrent strategy.

use super::FetchPeopleUseCase;
use super::types::{AggregateError, FetchError, FetchOutcome};
use crate::ports::people_source::PeopleSource;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::shared::race_cancelled;
use roster_domain::{FetchProgress, PersonId};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

impl<S: PeopleSource + 'static> FetchPeopleUseCase<S> {
    pub(super) async fn fetch_sequential(
        &self,
        ids: &[PersonId],
        cancel: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> FetchOutcome {
        let mut tracker = FetchProgress::new(ids.len());
        let mut people = Vec::with_capacity(ids.len());

        for (position, &id) in ids.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!("Cancellation observed before person {}", id);
                return FetchOutcome::Canceled;
            }

            debug!("Fetching person {} ({}/{})", id, position + 1, ids.len());
            match race_cancelled(cancel, self.source.fetch_person(id, cancel)).await {
                Ok(person) => {
                    self.record_success(&person, &mut tracker, progress);
                    people.push(person);
                }
                // Check if the real cause was cancellation
                Err(_) if cancel.is_cancelled() => return FetchOutcome::Canceled,
                Err(error) => {
                    self.record_failure(id, &error, progress);
                    info!(
                        "Stopping after failure; {} id(s) not attempted",
                        ids.len() - position - 1
                    );
                    return FetchOutcome::failed(AggregateError::single(FetchError::Person {
                        id,
                        source: error,
                    }));
                }
            }
        }

        if cancel.is_cancelled() {
            debug!("Cancellation observed after the last fetch");
            return FetchOutcome::Canceled;
        }

        FetchOutcome::Succeeded(people)
    }
}
