//! In-memory people source for offline runs.

use async_trait::async_trait;
use chrono::NaiveDate;
use roster_application::ports::people_source::{PeopleSource, SourceError};
use roster_domain::{Person, PersonId};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// [`PeopleSource`] serving a fixed roster with simulated latency.
///
/// IDs marked with [`with_failures`](Self::with_failures) answer with
/// `Status { 500 }`, which makes aggregate failures easy to demonstrate.
pub struct StaticPeopleSource {
    people: BTreeMap<PersonId, Person>,
    failing: HashSet<PersonId>,
    delay: Duration,
}

impl StaticPeopleSource {
    pub fn new(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            people: people.into_iter().map(|p| (p.id(), p)).collect(),
            failing: HashSet::new(),
            delay: Duration::ZERO,
        }
    }

    /// The nine-person demo roster
    pub fn sample() -> Self {
        let roster = [
            (1, "John", "Koenig", (1975, 10, 17), 6),
            (2, "Dylan", "Hunt", (2000, 10, 2), 8),
            (3, "Leela", "Turanga", (1999, 3, 28), 8),
            (4, "John", "Crichton", (1999, 3, 19), 7),
            (5, "Dave", "Lister", (1988, 2, 15), 9),
            (6, "Laura", "Roslin", (2003, 12, 8), 6),
            (7, "John", "Sheridan", (1994, 1, 26), 6),
            (8, "Dante", "Montana", (2000, 11, 1), 5),
            (9, "Isaac", "Gampu", (1977, 9, 10), 4),
        ];

        Self::new(roster.into_iter().filter_map(|(id, given, family, (y, m, d), rating)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|start| Person::new(PersonId::new(id), given, family, start).with_rating(rating))
        }))
    }

    /// Make the given IDs fail with a server error
    pub fn with_failures(mut self, ids: impl IntoIterator<Item = PersonId>) -> Self {
        self.failing.extend(ids);
        self
    }

    /// Simulated latency applied to every request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    async fn simulate_latency(&self, cancel: &CancellationToken) -> Result<(), SourceError> {
        if cancel.is_cancelled() {
            return Err(SourceError::Cancelled);
        }
        tokio::select! {
            _ = cancel.cancelled() => Err(SourceError::Cancelled),
            _ = tokio::time::sleep(self.delay) => Ok(()),
        }
    }
}

#[async_trait]
impl PeopleSource for StaticPeopleSource {
    async fn list_ids(&self, cancel: &CancellationToken) -> Result<Vec<PersonId>, SourceError> {
        self.simulate_latency(cancel).await?;
        Ok(self.people.keys().copied().collect())
    }

    async fn fetch_person(
        &self,
        id: PersonId,
        cancel: &CancellationToken,
    ) -> Result<Person, SourceError> {
        self.simulate_latency(cancel).await?;
        debug!("Serving person {} from static roster", id);

        let url = format!("static://people/{}", id);
        if self.failing.contains(&id) {
            return Err(SourceError::Status { status: 500, url });
        }
        self.people
            .get(&id)
            .cloned()
            .ok_or(SourceError::Status { status: 404, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_lists_ids_in_order() {
        let source = StaticPeopleSource::sample();
        let ids = source.list_ids(&CancellationToken::new()).await.unwrap();
        assert_eq!(ids.len(), 9);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_failing_ids_return_server_error() {
        let source = StaticPeopleSource::sample().with_failures([PersonId::new(3)]);
        let token = CancellationToken::new();

        assert!(source.fetch_person(PersonId::new(2), &token).await.is_ok());
        let err = source.fetch_person(PersonId::new(3), &token).await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let source = StaticPeopleSource::sample();
        let err = source
            .fetch_person(PersonId::new(42), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_latency_honors_cancellation() {
        let source = StaticPeopleSource::sample().with_delay(Duration::from_secs(30));
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let err = source.fetch_person(PersonId::new(1), &token).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
