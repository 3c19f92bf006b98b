//! Effective run settings: file configuration with CLI overrides applied.

use roster_application::FetchParams;
use roster_domain::{ConfigIssue, FetchMode, OutputFormat};
use roster_infrastructure::{ConfigValidationError, FileConfig, SourceSettings};
use roster_presentation::Cli;

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub mode: FetchMode,
    pub source: SourceSettings,
    pub params: FetchParams,
    pub format: OutputFormat,
    pub color: bool,
    pub show_progress: bool,
    pub simple_progress: bool,
}

impl RunSettings {
    /// Merge CLI flags over the loaded file config.
    ///
    /// Validation runs after the merge so bad flag values are reported too.
    /// Returns the warning-level issues alongside the settings.
    pub fn resolve(
        cli: &Cli,
        mut file: FileConfig,
    ) -> Result<(Self, Vec<ConfigIssue>), ConfigValidationError> {
        if let Some(base_url) = &cli.base_url {
            file.source.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            file.source.timeout_seconds = timeout;
        }
        if let Some(mode) = cli.mode {
            file.fetch.mode = FetchMode::from(mode).to_string();
        }

        let warnings = file.check()?;
        let mode = file.fetch.parse_mode().0;
        let format = cli
            .output
            .map(OutputFormat::from)
            .or(file.output.format)
            .unwrap_or_default();

        let settings = Self {
            mode,
            source: file.source.to_settings(),
            params: file.fetch.to_params(),
            format,
            color: file.output.color,
            show_progress: !cli.quiet && file.output.show_progress,
            simple_progress: cli.simple_progress,
        };
        Ok((settings, warnings))
    }
}
