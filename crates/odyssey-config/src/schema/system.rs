//! System configuration types: logging and debug tooling.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Debug parameter panel and developer aids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DebugConfig {
    /// Show the galaxy parameter panel at startup (toggle with `H`).
    pub show_panel: bool,
    /// Fixed seed for all random generation. `None` draws from entropy.
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, LogLevel::Trace);
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().as_directive(), "info");
        assert_eq!(LogLevel::Debug.as_directive(), "debug");
    }

    #[test]
    fn debug_panel_hidden_by_default() {
        let config = DebugConfig::default();
        assert!(!config.show_panel);
        assert!(config.seed.is_none());
    }
}
