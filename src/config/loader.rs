//! Configuration file loading and parsing.

use std::path::Path;

use super::model::WeComConfig;
use crate::error::ConfigError;

/// Loads the configuration file from disk and parses it.
pub fn load_from_path(path: &Path) -> Result<WeComConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: WeComConfig =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(config)
}

/// Loads the configuration file and rejects structurally invalid configs.
pub fn load_and_validate(path: &Path) -> Result<WeComConfig, ConfigError> {
    let config = load_from_path(path)?;

    if !config.is_valid() {
        tracing::error!(path = %path.display(), "WeCom config rejected");
        return Err(ConfigError::Invalid {
            reason: "webhook-url must be non-empty and override groups must be \
                     unique with non-empty group and webhook-url"
                .to_string(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        overrides = config.overrides.len(),
        "Loaded WeCom configuration"
    );
    Ok(config)
}
