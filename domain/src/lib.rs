//! Domain layer for roster
//!
//! This crate contains the entities and value objects shared by every other
//! layer. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## People
//!
//! A [`Person`] is produced exactly once per successful per-ID fetch and is
//! identified by a [`PersonId`].
//!
//! ## Fetch runs
//!
//! A run lists the IDs once, then fetches each person under a [`FetchMode`]:
//!
//! - **Concurrent** (default): every fetch in flight at once, all failures collected
//! - **Sequential**: one fetch at a time, stops at the first failure
//!
//! Progress within a run is tracked by [`FetchProgress`] and reported as a [`Percent`].

pub mod config;
pub mod core;
pub mod fetch;
pub mod person;

// Re-export commonly used types
pub use config::{
    output_format::OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::error::DomainError;
pub use fetch::{
    mode::FetchMode,
    progress::{FetchProgress, Percent},
};
pub use person::{entities::Person, value_objects::PersonId};
