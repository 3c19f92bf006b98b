//! Infrastructure layer for roster
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod people;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFetchConfig, FileOutputConfig,
    FileOutputFormat, FileSourceConfig,
};
pub use logging::JsonlRunLogger;
pub use people::{HttpPeopleSource, SourceSettings, StaticPeopleSource};
