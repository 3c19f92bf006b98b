//! Output formatter trait

use chrono::{DateTime, Local};
use roster_application::FetchOutcome;
use roster_domain::{FetchMode, OutputFormat};

/// A finished run, ready for rendering
pub struct RunReport<'a> {
    pub mode: FetchMode,
    pub outcome: &'a FetchOutcome,
    pub started: DateTime<Local>,
    pub finished: DateTime<Local>,
}

impl RunReport<'_> {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished - self.started).num_milliseconds()
    }
}

/// Trait for formatting run results
pub trait OutputFormatter {
    /// Format the complete run report
    fn format(&self, report: &RunReport<'_>) -> String;

    /// Format as JSON
    fn format_json(&self, report: &RunReport<'_>) -> String;

    /// Format in the requested output format
    fn render(&self, report: &RunReport<'_>, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
