//! WeCom Alert - webhook notifications for endpoint health monitoring.
//!
//! This library posts markdown-formatted messages to WeCom (WeChat Work)
//! group-robot webhooks when a monitored endpoint changes health state,
//! either triggering or resolving an alert. It owns configuration with
//! per-group webhook overrides, message rendering, and a single synchronous
//! HTTP delivery attempt. Alert lifecycle decisions and health checks are
//! made by the caller.

pub mod alert;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod notify;

pub use alert::Alert;
pub use config::{Override, WeComConfig};
pub use endpoint::{CheckResult, ConditionResult, Endpoint};
pub use error::{ConfigError, NotificationError};
pub use notify::clock::{Clock, SystemClock};
pub use notify::AlertProvider;
