//! Presentation layer for roster
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and interactive run controls.

pub mod cli;
pub mod controls;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ModeArg, OutputFormat};
pub use controls::keys::{KeyCommand, KeyControls};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, RunReport};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
