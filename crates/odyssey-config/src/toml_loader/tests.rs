//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_odyssey_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, odyssey_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[galaxy]
count = 2000
color = "#88ccff"

[universe]
odyssey_count = 50
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.galaxy.count, 2000);
    assert_eq!(config.galaxy.color, "#88ccff");
    assert_eq!(config.universe.odyssey_count, 50);
    // Defaults preserved
    assert_eq!(config.galaxy.branches, 3);
    assert_eq!(config.scene.clear_color, "#222222");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, odyssey_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[galaxy]
branches = 40
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.galaxy.branches, 40);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("odyssey-explorer").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.galaxy.count, 100_000);
    assert_eq!(config.window.title, "Odyssey Explorer");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ExplorerConfig;

    let content = default_config_toml();
    let config: ExplorerConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.universe.first_ring_capacity, 10);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_toml_names_schema_version() {
    let content = super::template::default_config_toml();
    let expected = format!("# Schema version {}\n", crate::CONFIG_SCHEMA_VERSION);
    assert!(content.contains(&expected));
    assert!(!content.contains("{schema_version}"));
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("odyssey-explorer"));
        assert!(path_str.ends_with("config.toml"));
    }
}
