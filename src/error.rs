//! Error types for configuration and notification delivery.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ParseFailed { path: PathBuf, message: String },

    #[error("Invalid WeCom configuration: {reason}")]
    Invalid { reason: String },
}

/// Notification sending errors.
///
/// Delivery is a single attempt; both variants surface to the caller
/// unchanged, and retrying is the caller's decision.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// The request could not be built or transmitted.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The webhook endpoint answered with a non-success status.
    #[error("webhook returned status code {status}: {body}")]
    Delivery { status: u16, body: String },
}
