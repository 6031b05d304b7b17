//! Alert descriptor attached to a monitored endpoint.

use serde::{Deserialize, Serialize};

/// Alert configuration for a monitored endpoint.
///
/// Thresholds and the resolved-notification flag are interpreted by the
/// caller's alert lifecycle engine; this crate only reads the description
/// when rendering messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Alert {
    /// Human-readable description included in notifications.
    #[serde(default)]
    pub description: Option<String>,

    /// Consecutive failures required before the alert triggers.
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u32,

    /// Consecutive successes required before the alert resolves.
    #[serde(default = "default_success_threshold")]
    pub success_threshold: u32,

    /// Whether a notification should also be sent when the alert resolves.
    #[serde(default)]
    pub send_on_resolved: Option<bool>,
}

impl Alert {
    /// Returns the description text, or an empty string when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            description: None,
            failure_threshold: default_failure_threshold(),
            success_threshold: default_success_threshold(),
            send_on_resolved: None,
        }
    }
}

fn default_failure_threshold() -> u32 {
    3
}

fn default_success_threshold() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_text_is_empty_when_absent() {
        let alert = Alert::default();
        assert_eq!(alert.description_text(), "");

        let alert = Alert {
            description: Some("db is down".to_string()),
            ..Alert::default()
        };
        assert_eq!(alert.description_text(), "db is down");
    }

    #[test]
    fn deserializes_with_defaults() {
        let alert: Alert = serde_yaml::from_str("description: high latency").unwrap();
        assert_eq!(alert.description.as_deref(), Some("high latency"));
        assert_eq!(alert.failure_threshold, 3);
        assert_eq!(alert.success_threshold, 2);
        assert_eq!(alert.send_on_resolved, None);
    }
}
