//! Fetch mode definitions.
//!
//! Defines [`FetchMode`], the single flag that selects how per-ID fetches
//! are scheduled within a run.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheduling strategy for the per-ID fetches of a run.
///
/// # Concurrent vs Sequential
///
/// - **Concurrent** (default): all fetches are dispatched without waiting
///   for each other. Every fetch is awaited even after a failure, so the
///   run reports every independent failure.
///
/// - **Sequential**: fetches run one at a time in ID-list order. The first
///   failure or cancellation stops the remaining items from being attempted,
///   so the run reports a single error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Concurrent,
    Sequential,
}

impl FetchMode {
    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            FetchMode::Concurrent => "Concurrent: all fetches in flight, every failure reported",
            FetchMode::Sequential => "Sequential: one fetch at a time, stops at first failure",
        }
    }

    /// Whether a failure stops the remaining items from being attempted
    pub fn short_circuits(&self) -> bool {
        matches!(self, FetchMode::Sequential)
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Concurrent => write!(f, "concurrent"),
            FetchMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for FetchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concurrent" | "parallel" | "c" => Ok(FetchMode::Concurrent),
            "sequential" | "await" | "s" => Ok(FetchMode::Sequential),
            _ => Err(DomainError::InvalidFetchMode(s.to_string())),
        }
    }
}
