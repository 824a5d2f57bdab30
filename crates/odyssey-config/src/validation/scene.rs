//! Window, camera, and scene validation.

use crate::schema::ExplorerConfig;

use super::helpers::{validate_color, validate_range, validate_range_f32};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ExplorerConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &ExplorerConfig) {
    let c = &config.camera;
    validate_range_f32(errors, "camera.fov", c.fov, 10.0, 150.0);
    validate_range_f32(errors, "camera.near", c.near, f32::MIN_POSITIVE, c.far);
    validate_range_f32(errors, "camera.far", c.far, c.near, 1.0e6);
    validate_range_f32(
        errors,
        "camera.min_distance",
        c.min_distance,
        0.0,
        c.max_distance,
    );
    validate_range_f32(
        errors,
        "camera.max_distance",
        c.max_distance,
        f32::MIN_POSITIVE,
        1.0e5,
    );
    validate_range_f32(
        errors,
        "camera.auto_rotate_speed",
        c.auto_rotate_speed,
        -60.0,
        60.0,
    );
}

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &ExplorerConfig) {
    let s = &config.scene;
    if s.textures.is_empty() {
        errors.push("scene.textures must name at least one texture".into());
    }
    validate_range_f32(
        errors,
        "scene.ambient_intensity",
        s.ambient_intensity,
        0.0,
        20.0,
    );
    validate_range(errors, "scene.sphere_segments", s.sphere_segments, 3, 128);
    validate_color(errors, "scene.clear_color", &s.clear_color);
    validate_color(errors, "scene.ambient_color", &s.ambient_color);
}
