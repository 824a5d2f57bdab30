//! Odyssey placement and connection configuration types.

use serde::{Deserialize, Serialize};

/// How odysseys are positioned vertically inside a ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SpawnMode {
    /// Every odyssey sits on the y = 0 plane.
    #[default]
    Horizontal,
    /// Random height within `max_vertical_spawn_height`.
    Scattered,
}

/// Ring layout of the odyssey population.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Number of odysseys to generate (valid range: 0-10000).
    pub odyssey_count: u32,
    /// Radius of the innermost ring.
    pub first_ring_radius: f32,
    /// Distance added to the radius for each following ring.
    pub ring_spacing: f32,
    /// Number of odysseys in the innermost ring (valid range: 1-1000).
    pub first_ring_capacity: u32,
    /// Multiplier applied to the capacity for each following ring (valid range: 1.0-4.0).
    pub ring_growth: f32,
    pub spawn_mode: SpawnMode,
    /// Height of the band used by `SpawnMode::Scattered`.
    pub max_vertical_spawn_height: f32,
    /// Whether the fixed odyssey at the origin is shown.
    pub show_center: bool,
    pub connections: ConnectionConfig,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            odyssey_count: 20,
            first_ring_radius: 7.0,
            ring_spacing: 5.0,
            first_ring_capacity: 10,
            ring_growth: 1.5,
            spawn_mode: SpawnMode::Horizontal,
            max_vertical_spawn_height: 10.0,
            show_center: true,
            connections: ConnectionConfig::default(),
        }
    }
}

/// Curved connection lines between odysseys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Maximum vertical offset of a curve's control point.
    pub max_line_height: f32,
    /// Segments each curve is sampled into (valid range: 1-256).
    pub segments: u32,
    pub color: String,
    /// Line opacity (valid range: 0.0-1.0).
    pub opacity: f32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_line_height: 8.0,
            segments: 20,
            color: "#ffffff".into(),
            opacity: 0.15,
        }
    }
}
