//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
    pub startup_mode: StartupMode,
    /// Present with vsync (Fifo) instead of the lowest-latency mode.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Odyssey Explorer".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            vsync: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Odyssey Explorer");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert_eq!(config.startup_mode, StartupMode::Windowed);
        assert!(config.vsync);
    }

    #[test]
    fn startup_mode_serialization() {
        let json = serde_json::to_string(&StartupMode::Fullscreen).unwrap();
        assert_eq!(json, "\"fullscreen\"");
        let deserialized: StartupMode = serde_json::from_str("\"maximized\"").unwrap();
        assert_eq!(deserialized, StartupMode::Maximized);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Galaxy"
width = 1920
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Galaxy");
        assert_eq!(config.width, 1920);
        // Defaults preserved
        assert_eq!(config.height, 800);
        assert!(config.vsync);
    }
}
