//! Galaxy point-field configuration types.

use serde::{Deserialize, Serialize};

/// Parameters of the spiral galaxy point cloud.
///
/// Every field is exposed on the debug panel; changing any of them
/// regenerates the whole field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Number of points (valid range: 100-1000000).
    pub count: u32,
    /// Point sprite size in world units (valid range: 0.001-0.1).
    pub size: f32,
    /// Outer radius of the disc (valid range: 1-500).
    pub radius: f32,
    /// Number of spiral arms (valid range: 2-10).
    pub branches: u32,
    /// Winding per unit radius (valid range: -3.0-3.0).
    pub spin: f32,
    /// Scatter amount (valid range: 0.0-2.0).
    pub randomness: f32,
    /// Exponent applied to the per-axis jitter (valid range: 1.0-10.0).
    pub randomness_power: f32,
    /// Vertical jitter scale (valid range: 1-150).
    pub y_height: f32,
    /// Point color as "#RRGGBB".
    pub color: String,
    /// Point opacity (valid range: 0.0-1.0).
    pub opacity: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.001,
            radius: 20.0,
            branches: 3,
            spin: 1.3,
            randomness: 0.2,
            randomness_power: 6.0,
            y_height: 5.0,
            color: "#ff5588".into(),
            opacity: 0.5,
        }
    }
}
