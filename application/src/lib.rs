//! Application layer for roster
//!
//! This crate contains the fetch use case, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FetchParams;
pub use ports::{
    people_source::{PeopleSource, SourceError},
    progress::{NoProgress, ProgressCallback, ProgressNotifier},
    run_logger::{NoRunLogger, RunEvent, RunLogger},
};
pub use use_cases::fetch_people::{
    AggregateError, FetchError, FetchOutcome, FetchPeopleError, FetchPeopleInput,
    FetchPeopleUseCase,
};
