//! Ring layout and connection validation.

use crate::schema::ExplorerConfig;

use super::helpers::{validate_color, validate_range, validate_range_f32};

pub(crate) fn validate_universe(errors: &mut Vec<String>, config: &ExplorerConfig) {
    let u = &config.universe;
    validate_range(errors, "universe.odyssey_count", u.odyssey_count, 0, 10_000);
    validate_range(
        errors,
        "universe.first_ring_capacity",
        u.first_ring_capacity,
        1,
        1000,
    );
    validate_range_f32(errors, "universe.ring_growth", u.ring_growth, 1.0, 4.0);
    validate_range_f32(
        errors,
        "universe.first_ring_radius",
        u.first_ring_radius,
        0.0,
        10_000.0,
    );
    // Radius must strictly increase from ring to ring.
    validate_range_f32(
        errors,
        "universe.ring_spacing",
        u.ring_spacing,
        f32::MIN_POSITIVE,
        10_000.0,
    );
    validate_range_f32(
        errors,
        "universe.max_vertical_spawn_height",
        u.max_vertical_spawn_height,
        0.0,
        10_000.0,
    );
    validate_range_f32(
        errors,
        "universe.connections.max_line_height",
        u.connections.max_line_height,
        0.0,
        10_000.0,
    );
    validate_range(
        errors,
        "universe.connections.segments",
        u.connections.segments,
        1,
        256,
    );
    validate_range_f32(
        errors,
        "universe.connections.opacity",
        u.connections.opacity,
        0.0,
        1.0,
    );
    validate_color(errors, "universe.connections.color", &u.connections.color);
}
