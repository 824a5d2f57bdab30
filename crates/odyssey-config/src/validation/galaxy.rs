//! Galaxy parameter validation, using the debug panel slider ranges.

use crate::schema::ExplorerConfig;

use super::helpers::{validate_color, validate_range, validate_range_f32};

pub(crate) fn validate_galaxy(errors: &mut Vec<String>, config: &ExplorerConfig) {
    let g = &config.galaxy;
    validate_range(errors, "galaxy.count", g.count, 100, 1_000_000);
    validate_range_f32(errors, "galaxy.size", g.size, 0.001, 0.1);
    validate_range_f32(errors, "galaxy.radius", g.radius, 1.0, 500.0);
    validate_range(errors, "galaxy.branches", g.branches, 2, 10);
    validate_range_f32(errors, "galaxy.spin", g.spin, -3.0, 3.0);
    validate_range_f32(errors, "galaxy.randomness", g.randomness, 0.0, 2.0);
    validate_range_f32(
        errors,
        "galaxy.randomness_power",
        g.randomness_power,
        1.0,
        10.0,
    );
    validate_range_f32(errors, "galaxy.y_height", g.y_height, 1.0, 150.0);
    validate_range_f32(errors, "galaxy.opacity", g.opacity, 0.0, 1.0);
    validate_color(errors, "galaxy.color", &g.color);
}
