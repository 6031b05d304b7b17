//! WeCom group-robot webhook notifications.

use std::sync::Arc;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::clock::{Clock, SystemClock};
use crate::alert::Alert;
use crate::config::WeComConfig;
use crate::endpoint::{CheckResult, Endpoint};
use crate::error::NotificationError;

/// Time zone used for the `update time` line (UTC+8, WeCom's home zone).
const DISPLAY_ZONE_OFFSET_SECS: i32 = 8 * 3600;

/// Sends alert notifications to WeCom group-robot webhooks.
///
/// Holds an immutable configuration and a shared `reqwest::Client`; safe to
/// call concurrently. Each `send` is a single POST with no retry.
pub struct AlertProvider {
    config: WeComConfig,
    client: reqwest::Client,
    clock: Arc<dyn Clock>,
    display_zone: FixedOffset,
}

impl AlertProvider {
    /// Creates a provider using the system clock.
    pub fn new(config: WeComConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a provider with an injected clock.
    pub fn with_clock(config: WeComConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            clock,
            // 8 hours is always within chrono's offset range
            display_zone: FixedOffset::east_opt(DISPLAY_ZONE_OFFSET_SECS).unwrap(),
        }
    }

    /// Replaces the HTTP client, e.g. to impose timeouts or proxies.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Returns whether the provider's configuration is valid.
    pub fn is_valid(&self) -> bool {
        self.config.is_valid()
    }

    /// Returns the default alert configuration, if any.
    pub fn default_alert(&self) -> Option<&Alert> {
        self.config.default_alert.as_ref()
    }

    /// Returns the webhook URL for a group: the first override whose group
    /// matches exactly, falling back to the default URL.
    pub fn webhook_url_for_group(&self, group: &str) -> &str {
        self.config
            .overrides
            .iter()
            .find(|o| o.group == group)
            .map(|o| o.webhook_url.as_str())
            .unwrap_or(&self.config.webhook_url)
    }

    /// Sends an alert notification for an endpoint state change.
    ///
    /// `resolved` selects the resolved or triggered banner. Statuses <= 399
    /// count as delivered; the response body is discarded on success and
    /// attached to the error otherwise.
    pub async fn send(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> Result<(), NotificationError> {
        let url = self.webhook_url_for_group(&endpoint.group);
        let body = Body {
            msgtype: "markdown".to_string(),
            markdown: Markdown {
                content: self.build_message(endpoint, alert, result, resolved),
            },
        };

        debug!(
            endpoint = %endpoint.name,
            group = %endpoint.group,
            resolved,
            "Sending WeCom notification"
        );

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status().as_u16();
        if status > 399 {
            let body = response.text().await.unwrap_or_default();
            error!(status, body = %body, "WeCom webhook rejected notification");
            return Err(NotificationError::Delivery { status, body });
        }

        Ok(())
    }

    /// Renders the markdown message: banner, endpoint info, conditions.
    fn build_message(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> String {
        let title = if resolved {
            "# <font color=\"info\">Alert Resolved</font>\n"
        } else {
            "# <font color=\"warning\">Alert Triggered</font>\n"
        };

        let timestamp = self
            .clock
            .now()
            .with_timezone(&self.display_zone)
            .format("%Y-%m-%d %H:%M:%S");

        let mut info = String::from("## Endpoint Info\n");
        info.push_str(&format!(
            "> group: <font color=\"comment\">{}</font>\n",
            endpoint.group
        ));
        info.push_str(&format!(
            "> name: <font color=\"comment\">{}</font>\n",
            endpoint.name
        ));
        info.push_str(&format!("> url: [{}]({})\n", endpoint.url, endpoint.url));
        info.push_str(&format!(
            "> describe: <font color=\"comment\">{}</font>\n",
            alert.description_text()
        ));
        info.push_str(&format!("> update time: {}\n\n", timestamp));

        let mut conditions = String::from("## Condition:\n");
        for condition_result in &result.condition_results {
            let prefix = if condition_result.success { "✅" } else { "❌" };
            conditions.push_str(&format!("{} - `{}`\n", prefix, condition_result.condition));
        }

        format!("{}{}{}", title, info, conditions)
    }
}

/// JSON envelope understood by the WeCom group-robot API.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Body {
    msgtype: String,
    markdown: Markdown,
}

/// Markdown payload within the envelope.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Markdown {
    content: String,
}
