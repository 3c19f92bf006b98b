//! People source port
//!
//! Defines the interface for retrieving people from the remote source.

use async_trait::async_trait;
use roster_domain::{Person, PersonId};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur during remote source operations
///
/// Every variant except [`SourceError::Cancelled`] is a transport failure.
/// A non-success response is always one of these, never an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

impl SourceError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SourceError::Cancelled)
    }

    /// Short, stable name of the error kind (used in reports and event logs)
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Connection(_) => "connection",
            SourceError::Timeout => "timeout",
            SourceError::Status { .. } => "status",
            SourceError::Decode(_) => "decode",
            SourceError::Cancelled => "cancelled",
            SourceError::Other(_) => "other",
        }
    }
}

/// Remote source of people
///
/// This port defines how the application layer reaches the remote source.
/// Implementations (adapters) live in the infrastructure layer and must be
/// safe to call concurrently from many tasks.
///
/// Both operations must honor `cancel` promptly and return
/// [`SourceError::Cancelled`] when they stop because of it.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// List the IDs of every person
    async fn list_ids(&self, cancel: &CancellationToken) -> Result<Vec<PersonId>, SourceError>;

    /// Fetch one person by ID
    async fn fetch_person(
        &self,
        id: PersonId,
        cancel: &CancellationToken,
    ) -> Result<Person, SourceError>;
}
