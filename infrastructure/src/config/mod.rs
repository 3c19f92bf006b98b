//! Configuration file loading for roster
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROSTER_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./roster.toml` or `./.roster.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/roster/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFetchConfig, FileOutputConfig, FileOutputFormat,
    FileSourceConfig,
};
pub use loader::ConfigLoader;
