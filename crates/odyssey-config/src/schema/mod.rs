//! Configuration schema types for Odyssey Explorer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the explorer ships with.

mod camera;
mod galaxy;
mod scene;
mod system;
mod universe;
mod window;

pub use camera::*;
pub use galaxy::*;
pub use scene::*;
pub use system::*;
pub use universe::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ExplorerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    pub galaxy: GalaxyConfig,
    pub universe: UniverseConfig,
    pub logging: LoggingConfig,
    pub debug: DebugConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_galaxy_parameters() {
        let config = ExplorerConfig::default();
        assert_eq!(config.galaxy.count, 100_000);
        assert!((config.galaxy.size - 0.001).abs() < f32::EPSILON);
        assert!((config.galaxy.radius - 20.0).abs() < f32::EPSILON);
        assert_eq!(config.galaxy.branches, 3);
        assert!((config.galaxy.spin - 1.3).abs() < f32::EPSILON);
        assert!((config.galaxy.randomness - 0.2).abs() < f32::EPSILON);
        assert!((config.galaxy.randomness_power - 6.0).abs() < f32::EPSILON);
        assert!((config.galaxy.y_height - 5.0).abs() < f32::EPSILON);
        assert_eq!(config.galaxy.color, "#ff5588");
    }

    #[test]
    fn default_universe_layout() {
        let config = ExplorerConfig::default();
        assert_eq!(config.universe.odyssey_count, 20);
        assert!((config.universe.first_ring_radius - 7.0).abs() < f32::EPSILON);
        assert!((config.universe.ring_spacing - 5.0).abs() < f32::EPSILON);
        assert_eq!(config.universe.first_ring_capacity, 10);
        assert!((config.universe.ring_growth - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.universe.spawn_mode, SpawnMode::Horizontal);
        assert!((config.universe.max_vertical_spawn_height - 10.0).abs() < f32::EPSILON);
        assert!((config.universe.connections.max_line_height - 8.0).abs() < f32::EPSILON);
        assert_eq!(config.universe.connections.segments, 20);
    }

    #[test]
    fn default_camera() {
        let config = ExplorerConfig::default();
        assert!((config.camera.fov - 75.0).abs() < f32::EPSILON);
        assert_eq!(config.camera.position, [15.0, 20.0, 2.0]);
        assert!((config.camera.max_distance - 15.0).abs() < f32::EPSILON);
        assert!(config.camera.auto_rotate);
        assert!((config.camera.auto_rotate_speed - 0.3).abs() < f32::EPSILON);
        assert!(!config.camera.enable_rotate);
        assert!(!config.camera.enable_zoom);
    }

    #[test]
    fn default_scene_has_five_textures() {
        let config = ExplorerConfig::default();
        assert_eq!(config.scene.textures.len(), 5);
        assert_eq!(config.scene.textures[0], "images/baseAtmos.png");
        assert_eq!(config.scene.skybox, "images/BasicSkyboxHD.png");
        assert_eq!(config.scene.clear_color, "#222222");
    }

    #[test]
    fn spawn_mode_serialization() {
        let json = serde_json::to_string(&SpawnMode::Scattered).unwrap();
        assert_eq!(json, "\"scattered\"");
        let mode: SpawnMode = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(mode, SpawnMode::Horizontal);
    }

    #[test]
    fn partial_toml_preserves_defaults() {
        let toml_str = r#"
[galaxy]
count = 5000
branches = 5

[universe]
spawn_mode = "scattered"
"#;
        let config: ExplorerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.galaxy.count, 5000);
        assert_eq!(config.galaxy.branches, 5);
        assert!((config.galaxy.radius - 20.0).abs() < f32::EPSILON);
        assert_eq!(config.universe.spawn_mode, SpawnMode::Scattered);
        assert_eq!(config.universe.odyssey_count, 20);
        assert_eq!(config.window.title, "Odyssey Explorer");
    }

    #[test]
    fn empty_toml_is_default() {
        let config: ExplorerConfig = toml::from_str("").unwrap();
        assert_eq!(config.galaxy, GalaxyConfig::default());
        assert_eq!(config.universe.first_ring_capacity, 10);
    }
}
