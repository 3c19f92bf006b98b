//! Configuration validation results.
//!
//! Config loading never rejects a file outright for questionable values.
//! Instead it reports structured issues with a severity, and the caller
//! decides whether to abort (errors) or print and continue (warnings).

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A value could not be parsed into its enum type.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// The remote source URL is not an absolute http(s) URL.
    InvalidUrl { field: String, value: String },
    /// A duration that must be positive is zero.
    ZeroDuration { field: String },
    /// A duration is large enough to make cancellation feel unresponsive.
    ExcessiveDuration { field: String, millis: u64 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(
            ConfigIssueCode::ZeroDuration {
                field: "source.timeout_seconds".to_string(),
            },
            "timeout must be positive",
        );
        assert!(err.is_error());

        let warn = ConfigIssue::warning(
            ConfigIssueCode::ExcessiveDuration {
                field: "fetch.cancel_grace_ms".to_string(),
                millis: 60_000,
            },
            "grace period is long",
        );
        assert!(!warn.is_error());
    }

    #[test]
    fn test_display_prefixes_level() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::InvalidUrl {
                field: "source.base_url".to_string(),
                value: "ftp://x".to_string(),
            },
            "bad url",
        );
        assert_eq!(issue.to_string(), "warning: bad url");
    }
}
