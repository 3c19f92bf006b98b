//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod fetch;
mod output;
mod source;

pub use fetch::FileFetchConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use source::FileSourceConfig;

use roster_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected because it contains error-level issues
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n{}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote people service
    pub source: FileSourceConfig,
    /// Fetch strategy and cancellation settings
    pub fetch: FileFetchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Source URL and timeout
    /// 2. Fetch mode and cancellation grace period
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.source.validate());
        issues.extend(self.fetch.validate());
        issues
    }

    /// Fail on error-level issues; hand back the warnings otherwise.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::{FetchMode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[source]
base_url = "http://people.internal:8080"
timeout_seconds = 5
user_agent = "roster-test"

[fetch]
mode = "sequential"
cancel_grace_ms = 250

[output]
format = "json"
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.base_url, "http://people.internal:8080");
        assert_eq!(config.source.timeout_seconds, 5);
        assert_eq!(config.source.user_agent.as_deref(), Some("roster-test"));
        assert_eq!(config.fetch.parse_mode().0, FetchMode::Sequential);
        assert_eq!(config.fetch.cancel_grace_ms, 250);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.output.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[fetch]
mode = "s"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fetch.parse_mode().0, FetchMode::Sequential);
        // Defaults should apply
        assert_eq!(config.source, FileSourceConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.check().unwrap().is_empty());
    }

    #[test]
    fn test_check_separates_errors_from_warnings() {
        let mut config = FileConfig::default();
        config.fetch.mode = "turbo".to_string();
        let warnings = config.check().unwrap();
        assert_eq!(warnings.len(), 1);

        config.source.timeout_seconds = 0;
        let err = config.check().unwrap_err();
        let ConfigValidationError::Invalid(errors) = &err;
        assert_eq!(errors.len(), 1);
        assert!(err.to_string().contains("timeout_seconds"));
    }
}
