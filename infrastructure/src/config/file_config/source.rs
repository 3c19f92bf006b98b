//! Remote source configuration from TOML (`[source]` section)

use crate::people::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, SourceSettings};
use roster_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Base URL of the people service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: Option<String>,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            user_agent: None,
        }
    }
}

impl FileSourceConfig {
    pub fn to_settings(&self) -> SourceSettings {
        SourceSettings {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let valid_url = reqwest::Url::parse(&self.base_url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !valid_url {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "source.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                format!(
                    "source.base_url: '{}' is not an absolute http(s) URL",
                    self.base_url
                ),
            ));
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroDuration {
                    field: "source.timeout_seconds".to_string(),
                },
                "source.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileSourceConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.to_settings(), SourceSettings::default());
    }

    #[test]
    fn test_rejects_non_http_url() {
        for url in ["localhost:9874", "ftp://example.com", "not a url"] {
            let config = FileSourceConfig {
                base_url: url.to_string(),
                ..Default::default()
            };
            let issues = config.validate();
            assert_eq!(issues.len(), 1, "{}", url);
            assert!(issues[0].is_error());
        }
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = FileSourceConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert!(matches!(issues[0].code, ConfigIssueCode::ZeroDuration { .. }));
    }
}
