//! Scene assets, lighting, and clear color.

use serde::{Deserialize, Serialize};

/// Static scene resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory that texture paths are resolved against.
    pub asset_dir: String,
    /// Texture palette; each odyssey picks one at random.
    pub textures: Vec<String>,
    /// Equirectangular background image. Empty disables the skybox.
    pub skybox: String,
    pub clear_color: String,
    pub ambient_color: String,
    /// Ambient light multiplier (valid range: 0.0-20.0).
    pub ambient_intensity: f32,
    /// Latitude and longitude segments of the odyssey sphere (valid range: 3-128).
    pub sphere_segments: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_dir: ".".into(),
            textures: vec![
                "images/baseAtmos.png".into(),
                "images/temptations.png".into(),
                "images/showTime.png".into(),
                "images/honey01.png".into(),
                "images/iceland01.png".into(),
            ],
            skybox: "images/BasicSkyboxHD.png".into(),
            clear_color: "#222222".into(),
            ambient_color: "#404040".into(),
            ambient_intensity: 5.0,
            sphere_segments: 16,
        }
    }
}
