//! Concentric ring layout of the odyssey population.
//!
//! Odysseys are placed in order, ring by ring, walking one authoritative
//! slice with a cursor. Each ring sits `radius_step` farther out than the
//! previous one and can hold `growth` times as many odysseys. The last
//! ring takes whatever is left.

use std::ops::Range;

use odyssey_config::schema::{SpawnMode, UniverseConfig};
use rand::Rng;

use crate::odyssey::Odyssey;

/// Upper bound of synthetic connections attached to each placed odyssey.
pub const MAX_RANDOM_CONNECTIONS: usize = 2;

/// Smallest gap between consecutive rings. Keeps radii strictly increasing
/// even when the configured spacing is zero or negative.
pub const MIN_RING_SPACING: f32 = 0.5;

/// Vertical placement inside a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalSpawn {
    /// y = 0 for every odyssey.
    Horizontal,
    /// y uniform in `[-max_height / 2, max_height / 2)`.
    Scattered { max_height: f32 },
}

/// One placement band, referring to a contiguous run of odysseys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// 1-based ring number, innermost first.
    pub index: u32,
    pub radius: f32,
    /// Nominal capacity before clamping to the remaining odysseys.
    pub capacity: usize,
    pub start: usize,
    pub len: usize,
}

impl Ring {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Ring layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub first_radius: f32,
    pub radius_step: f32,
    pub first_capacity: usize,
    pub growth: f32,
    pub vertical: VerticalSpawn,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self::from_config(&UniverseConfig::default())
    }
}

impl RingLayout {
    pub fn from_config(config: &UniverseConfig) -> Self {
        let vertical = match config.spawn_mode {
            SpawnMode::Horizontal => VerticalSpawn::Horizontal,
            SpawnMode::Scattered => VerticalSpawn::Scattered {
                max_height: config.max_vertical_spawn_height,
            },
        };
        let radius_step = config.ring_spacing.max(MIN_RING_SPACING);
        if radius_step != config.ring_spacing {
            tracing::warn!(
                configured = config.ring_spacing,
                used = radius_step,
                "ring spacing too small, clamping"
            );
        }
        Self {
            first_radius: config.first_ring_radius,
            radius_step,
            first_capacity: config.first_ring_capacity as usize,
            growth: config.ring_growth,
            vertical,
        }
    }

    /// Position every odyssey and attach placeholder connections to ids in
    /// `[0, connection_id_bound)`. Returns the rings in placement order.
    ///
    /// The slice is never reordered or shrunk; ring `k` covers
    /// `rings[k].range()`.
    pub fn arrange<R: Rng + ?Sized>(
        &self,
        odysseys: &mut [Odyssey],
        connection_id_bound: u32,
        rng: &mut R,
    ) -> Vec<Ring> {
        let total = odysseys.len();
        let mut rings = Vec::new();
        let mut cursor = 0;
        let mut radius = self.first_radius;
        let mut capacity = self.first_capacity.max(1);
        let radius_step = self.radius_step.max(MIN_RING_SPACING);
        let mut index = 1;

        while cursor < total {
            let len = capacity.min(total - cursor);
            let spacing = 360.0 / len as f32;

            for (i, odyssey) in odysseys[cursor..cursor + len].iter_mut().enumerate() {
                let angle = (i as f32 * spacing).to_radians();
                let y = match self.vertical {
                    VerticalSpawn::Horizontal => 0.0,
                    VerticalSpawn::Scattered { max_height } => {
                        rng.gen::<f32>() * max_height - max_height / 2.0
                    }
                };
                odyssey.position = [angle.cos() * radius, y, angle.sin() * radius];
                attach_random_connections(odyssey, connection_id_bound, rng);
            }

            tracing::debug!(ring = index, radius, capacity, placed = len, "ring placed");
            rings.push(Ring {
                index,
                radius,
                capacity,
                start: cursor,
                len,
            });

            cursor += len;
            radius += radius_step;
            capacity = next_capacity(capacity, self.growth);
            index += 1;
        }

        rings
    }
}

/// Capacity of the ring after one holding `capacity`: scaled by `growth`
/// and rounded up, never shrinking and never below one.
pub fn next_capacity(capacity: usize, growth: f32) -> usize {
    let grown = (capacity as f32 * growth).ceil();
    (grown as usize).max(capacity).max(1)
}

/// Stand-in for a real relationship graph: 0 to `MAX_RANDOM_CONNECTIONS`
/// links to arbitrary ids, which may repeat, point back at the source, or
/// not exist at all.
fn attach_random_connections<R: Rng + ?Sized>(odyssey: &mut Odyssey, id_bound: u32, rng: &mut R) {
    if id_bound == 0 {
        return;
    }
    let amount = rng.gen_range(0..=MAX_RANDOM_CONNECTIONS);
    for _ in 0..amount {
        odyssey.connect(rng.gen_range(0..id_bound));
    }
}

// =============================================================================
// Tests
// =============================================================================
