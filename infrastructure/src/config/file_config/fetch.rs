//! Fetch configuration from TOML (`[fetch]` section)

use roster_application::FetchParams;
use roster_domain::{ConfigIssue, ConfigIssueCode, FetchMode};
use serde::{Deserialize, Serialize};

/// Grace periods above this make a cancelled run feel stuck.
const MAX_REASONABLE_GRACE_MS: u64 = 10_000;

/// Raw fetch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Scheduling strategy ("concurrent" or "sequential")
    pub mode: String,
    /// Time allowed for in-flight fetches to stop after cancellation
    pub cancel_grace_ms: u64,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            mode: FetchMode::default().to_string(),
            cancel_grace_ms: FetchParams::default().cancel_grace.as_millis() as u64,
        }
    }
}

impl FileFetchConfig {
    /// Parse mode string into FetchMode, returning warnings on failure.
    ///
    /// Accepts: "concurrent", "parallel", "c", "sequential", "await", "s"
    pub fn parse_mode(&self) -> (FetchMode, Vec<ConfigIssue>) {
        match self.mode.parse::<FetchMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "fetch.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["concurrent".to_string(), "sequential".to_string()],
                    },
                    format!(
                        "fetch.mode: unknown value '{}', falling back to '{}'",
                        self.mode,
                        FetchMode::default()
                    ),
                );
                (FetchMode::default(), vec![issue])
            }
        }
    }

    pub fn to_params(&self) -> FetchParams {
        FetchParams::default().with_cancel_grace_ms(self.cancel_grace_ms)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_mode().1;

        if self.cancel_grace_ms > MAX_REASONABLE_GRACE_MS {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ExcessiveDuration {
                    field: "fetch.cancel_grace_ms".to_string(),
                    millis: self.cancel_grace_ms,
                },
                format!(
                    "fetch.cancel_grace_ms: {}ms delays cleanup after cancellation",
                    self.cancel_grace_ms
                ),
            ));
        }

        issues
    }
}
