//! Odyssey Explorer configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use odyssey_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{ExplorerConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use odyssey_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template on first run. Nothing is
/// logged and nothing is range-checked; callers report
/// [`validation::validate`] once logging is up.
pub fn load_config(path: Option<&Path>) -> Result<ExplorerConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ExplorerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ExplorerConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"scene\""));
        assert!(json.contains("\"galaxy\""));
        assert!(json.contains("\"universe\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"debug\""));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn explicit_path_keeps_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[galaxy]\nbranches = 40\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.galaxy.branches, 40);
    }

    #[test]
    fn out_of_range_values_are_left_for_the_caller_to_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[universe]\nring_spacing = -5.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.universe.ring_spacing, -5.0);
        let err = validation::validate(&config).unwrap_err();
        assert!(err.to_string().contains("universe.ring_spacing"));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ExplorerConfig::default();
        let json = config_to_json(&config);
        let parsed: ExplorerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.galaxy, config.galaxy);
        assert_eq!(parsed.scene.textures, config.scene.textures);
        assert_eq!(parsed.universe.first_ring_capacity, 10);
    }
}
