//! Configuration data structures.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::alert::Alert;

/// WeCom provider configuration.
///
/// Constructed once at startup and treated as immutable afterwards; the
/// provider never mutates it, so concurrent `send` calls may share it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WeComConfig {
    /// Default webhook URL for endpoints without a matching override.
    pub webhook_url: String,

    /// Default alert configuration applied to endpoints by the caller.
    #[serde(default)]
    pub default_alert: Option<Alert>,

    /// Per-group webhook destinations, matched in order.
    #[serde(default)]
    pub overrides: Vec<Override>,
}

/// A per-group webhook destination overriding the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Override {
    /// Endpoint group the override applies to.
    pub group: String,

    /// Webhook URL used for that group.
    pub webhook_url: String,
}

impl WeComConfig {
    /// Returns whether the configuration is structurally valid.
    ///
    /// Invalid when the default webhook URL is empty, any override has an
    /// empty group or URL, or two overrides share a group. Pure check; the
    /// provider does not re-validate at send time.
    pub fn is_valid(&self) -> bool {
        let mut registered_groups = HashSet::new();
        for entry in &self.overrides {
            if entry.group.is_empty()
                || entry.webhook_url.is_empty()
                || !registered_groups.insert(entry.group.as_str())
            {
                return false;
            }
        }
        !self.webhook_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> WeComConfig {
        WeComConfig {
            webhook_url: "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=default".to_string(),
            default_alert: None,
            overrides: Vec::new(),
        }
    }

    #[test]
    fn valid_without_overrides() {
        assert!(base_config().is_valid());
    }

    #[test]
    fn valid_with_uniquely_grouped_overrides() {
        let mut config = base_config();
        config.overrides = vec![
            Override {
                group: "infra".to_string(),
                webhook_url: "https://x/infra".to_string(),
            },
            Override {
                group: "web".to_string(),
                webhook_url: "https://x/web".to_string(),
            },
        ];
        assert!(config.is_valid());
    }

    #[test]
    fn invalid_when_default_url_empty() {
        let mut config = base_config();
        config.webhook_url = String::new();
        assert!(!config.is_valid());
    }

    #[test]
    fn invalid_when_override_group_empty() {
        let mut config = base_config();
        config.overrides = vec![Override {
            group: String::new(),
            webhook_url: "https://x/infra".to_string(),
        }];
        assert!(!config.is_valid());
    }

    #[test]
    fn invalid_when_override_url_empty() {
        let mut config = base_config();
        config.overrides = vec![Override {
            group: "infra".to_string(),
            webhook_url: String::new(),
        }];
        assert!(!config.is_valid());
    }

    #[test]
    fn invalid_when_groups_duplicated() {
        let mut config = base_config();
        config.overrides = vec![
            Override {
                group: "infra".to_string(),
                webhook_url: "https://x/infra".to_string(),
            },
            Override {
                group: "infra".to_string(),
                webhook_url: "https://x/infra-2".to_string(),
            },
        ];
        assert!(!config.is_valid());
    }

    #[test]
    fn parses_kebab_case_yaml() {
        let yaml = r#"
webhook-url: "https://x/default"
default-alert:
  description: "endpoint unhealthy"
overrides:
  - group: infra
    webhook-url: "https://x/infra"
"#;
        let config: WeComConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.webhook_url, "https://x/default");
        assert_eq!(
            config.default_alert.as_ref().unwrap().description.as_deref(),
            Some("endpoint unhealthy")
        );
        assert_eq!(config.overrides.len(), 1);
        assert_eq!(config.overrides[0].group, "infra");
        assert!(config.is_valid());
    }
}
