//! Type definitions for the FetchPeople use case.

use crate::ports::people_source::SourceError;
use roster_domain::{FetchMode, Person, PersonId};
use std::fmt;
use thiserror::Error;

/// Input for the FetchPeople use case
#[derive(Debug, Clone, Default)]
pub struct FetchPeopleInput {
    /// How the per-ID fetches are scheduled
    pub mode: FetchMode,
}

impl FetchPeopleInput {
    pub fn new(mode: FetchMode) -> Self {
        Self { mode }
    }

    pub fn concurrent() -> Self {
        Self::new(FetchMode::Concurrent)
    }

    pub fn sequential() -> Self {
        Self::new(FetchMode::Sequential)
    }
}

/// A single failure within a run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The ID list could not be retrieved; nothing else was attempted.
    #[error("Failed to list person ids: {0}")]
    ListIds(#[source] SourceError),

    #[error("Failed to fetch person {id}: {source}")]
    Person {
        id: PersonId,
        #[source]
        source: SourceError,
    },

    /// A fetch task ended without producing a result (panic or abort).
    #[error("Fetch task failed: {0}")]
    Worker(String),
}

impl FetchError {
    /// The person this failure belongs to, if any
    pub fn person_id(&self) -> Option<PersonId> {
        match self {
            FetchError::Person { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The underlying source error, if any
    pub fn source_error(&self) -> Option<&SourceError> {
        match self {
            FetchError::ListIds(source) | FetchError::Person { source, .. } => Some(source),
            FetchError::Worker(_) => None,
        }
    }
}

/// One or more independent failures from a single run.
///
/// Never empty. Concurrent runs carry every per-item failure; sequential
/// runs and ID-list failures carry exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError {
    errors: Vec<FetchError>,
}

impl AggregateError {
    /// Build from collected failures; `None` when there were none.
    pub fn from_errors(errors: Vec<FetchError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn single(error: FetchError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FetchError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FetchError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<FetchError> {
        self.errors
    }

    /// IDs of the people whose fetch failed, in the order recorded
    pub fn failed_ids(&self) -> Vec<PersonId> {
        self.errors.iter().filter_map(FetchError::person_id).collect()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [only] => write!(f, "{}", only),
            errors => write!(f, "{} fetches failed", errors.len()),
        }
    }
}

impl std::error::Error for AggregateError {}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a FetchError;
    type IntoIter = std::slice::Iter<'a, FetchError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Terminal state of a run. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Every person was fetched; in ID-list order.
    Succeeded(Vec<Person>),
    /// The caller requested cancellation.
    Canceled,
    /// At least one fetch failed.
    ///
    /// `partial` holds the people already fetched by a concurrent run
    /// (ID-list order). Sequential runs and ID-list failures leave it empty.
    Failed {
        errors: AggregateError,
        partial: Vec<Person>,
    },
}

impl FetchOutcome {
    pub fn failed(errors: AggregateError) -> Self {
        FetchOutcome::Failed {
            errors,
            partial: Vec::new(),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, FetchOutcome::Succeeded(_))
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, FetchOutcome::Canceled)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }

    /// Short label for logs and event records
    pub fn label(&self) -> &'static str {
        match self {
            FetchOutcome::Succeeded(_) => "succeeded",
            FetchOutcome::Canceled => "canceled",
            FetchOutcome::Failed { .. } => "failed",
        }
    }

    /// Convert into a `Result`, dropping any partial successes.
    pub fn into_result(self) -> Result<Vec<Person>, FetchPeopleError> {
        match self {
            FetchOutcome::Succeeded(people) => Ok(people),
            FetchOutcome::Canceled => Err(FetchPeopleError::Cancelled),
            FetchOutcome::Failed { errors, .. } => Err(FetchPeopleError::Failed(errors)),
        }
    }
}

/// Errors from a fetch run, for callers that prefer `Result`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchPeopleError {
    #[error("Operation cancelled")]
    Cancelled,

    #[error(transparent)]
    Failed(#[from] AggregateError),
}

impl FetchPeopleError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchPeopleError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_error(id: i64) -> FetchError {
        FetchError::Person {
            id: PersonId::new(id),
            source: SourceError::Status {
                status: 500,
                url: format!("http://localhost:9874/people/{}", id),
            },
        }
    }

    #[test]
    fn test_aggregate_from_empty_is_none() {
        assert!(AggregateError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn test_aggregate_display_single_shows_inner() {
        let agg = AggregateError::single(FetchError::ListIds(SourceError::Timeout));
        assert_eq!(agg.to_string(), "Failed to list person ids: Request timed out");
    }

    #[test]
    fn test_aggregate_display_many_shows_count() {
        let agg = AggregateError::from_errors(vec![person_error(1), person_error(3)]).unwrap();
        assert_eq!(agg.to_string(), "2 fetches failed");
        assert_eq!(agg.failed_ids(), vec![PersonId::new(1), PersonId::new(3)]);
    }

    #[test]
    fn test_into_result() {
        assert!(FetchOutcome::Succeeded(Vec::new()).into_result().is_ok());
        assert!(
            FetchOutcome::Canceled
                .into_result()
                .unwrap_err()
                .is_cancelled()
        );

        let failed = FetchOutcome::failed(AggregateError::single(person_error(2)));
        assert!(failed.is_failed());
        match failed.into_result() {
            Err(FetchPeopleError::Failed(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_source_error_accessor() {
        assert_eq!(
            FetchError::ListIds(SourceError::Timeout).source_error(),
            Some(&SourceError::Timeout)
        );
        assert!(FetchError::Worker("panicked".to_string()).source_error().is_none());
        assert_eq!(person_error(4).person_id(), Some(PersonId::new(4)));
    }
}
