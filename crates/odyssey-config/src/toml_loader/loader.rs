//! Core TOML config loading: read from path or platform default.

use crate::schema::ExplorerConfig;
use odyssey_common::ConfigError;
use std::path::Path;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Values are not range-checked here; run [`crate::validation::validate`]
/// on the result.
pub fn load_from_path(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ExplorerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/odyssey-explorer/config.toml`
/// On Linux: `~/.config/odyssey-explorer/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ExplorerConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(ExplorerConfig::default())
        }
        Err(e) => Err(e),
    }
}
