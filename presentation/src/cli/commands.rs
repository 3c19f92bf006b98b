//! CLI command definitions

use clap::{Parser, ValueEnum};
use roster_domain::FetchMode;
use std::path::PathBuf;

/// Fetch strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Dispatch every fetch at once and report every failure
    #[value(alias = "parallel")]
    Concurrent,
    /// Fetch one at a time in ID order, stopping at the first failure
    #[value(alias = "await")]
    Sequential,
}

impl From<ModeArg> for FetchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Concurrent => FetchMode::Concurrent,
            ModeArg::Sequential => FetchMode::Sequential,
        }
    }
}

/// Output format for run results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON document on stdout
    Json,
}

impl From<OutputFormat> for roster_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => roster_domain::OutputFormat::Text,
            OutputFormat::Json => roster_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for roster
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about = "Fetch every person from the people service")]
#[command(long_about = r#"
Roster lists the person IDs from the people service, then fetches each person.

Two strategies are available:
  concurrent  All fetches in flight at once; every failure is reported
  sequential  One fetch at a time in ID order; stops at the first failure

While a run is in progress, type 'x' + Enter to cancel it or 'q' + Enter to quit.

Configuration files are loaded from (in priority order):
1. ROSTER_* environment variables
2. --config <path>     Explicit config file
3. ./roster.toml       Project-level config
4. ~/.config/roster/config.toml   Global config

Example:
  roster
  roster --mode sequential --base-url http://localhost:9874
  roster --offline --fail 3 --fail 7 --delay-ms 300
"#)]
pub struct Cli {
    /// Fetch strategy (default: concurrent, or fetch.mode from config)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Base URL of the people service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Use the built-in demo roster instead of the people service
    #[arg(long)]
    pub offline: bool,

    /// Make this person ID fail (offline only, repeatable)
    #[arg(long, value_name = "ID", requires = "offline")]
    pub fail: Vec<i64>,

    /// Simulated per-request latency in milliseconds (offline only)
    #[arg(long, value_name = "MS", requires = "offline")]
    pub delay_ms: Option<u64>,

    /// Cancel the run after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub cancel_after: Option<u64>,

    /// Output format (default: text, or output.format from config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print plain "N% Complete" lines instead of a progress bar
    #[arg(long)]
    pub simple_progress: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append structured run events (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not read cancel/quit keys from stdin
    #[arg(long)]
    pub no_keys: bool,
}
