//! Camera and orbit-control configuration types.

use serde::{Deserialize, Serialize};

/// Perspective camera with orbit controls around the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-150).
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position, before distance clamping.
    pub position: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one turn every 30 seconds.
    pub auto_rotate_speed: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 10_000.0,
            position: [15.0, 20.0, 2.0],
            min_distance: 1.0,
            max_distance: 15.0,
            auto_rotate: true,
            auto_rotate_speed: 0.3,
            enable_rotate: false,
            enable_zoom: false,
        }
    }
}
