//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid person id: {0}")]
    InvalidPersonId(String),

    #[error("Invalid fetch mode: {0}")]
    InvalidFetchMode(String),
}
