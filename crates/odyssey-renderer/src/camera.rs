//! Orbit camera circling a fixed target.
//!
//! State is spherical (yaw, pitch, distance) around `target`. Yaw is the
//! angle around +Y measured from +Z, pitch the elevation above the XZ plane.

use std::f32::consts::{FRAC_PI_2, TAU};

use odyssey_common::Vec3;
use odyssey_config::schema::CameraConfig;

use crate::sphere::matrix::{self, Mat4};

/// Pitch stays this far short of the poles so the view never flips.
const POLE_MARGIN: f32 = 0.017;
const DRAG_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
}

impl OrbitCamera {
    /// Camera at `config.position` looking at the origin.
    ///
    /// The distance is taken as-is; the first `update` clamps it.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let target = [0.0; 3];
        let (yaw, pitch, distance) = spherical(matrix::sub(config.position, target));
        Self {
            target,
            yaw,
            pitch: clamp_pitch(pitch),
            distance,
            fov_y: config.fov.to_radians(),
            aspect: aspect.max(1e-3),
            near: config.near,
            far: config.far,
            min_distance: config.min_distance,
            max_distance: config.max_distance.max(config.min_distance),
            auto_rotate: config.auto_rotate,
            auto_rotate_speed: config.auto_rotate_speed,
            enable_rotate: config.enable_rotate,
            enable_zoom: config.enable_zoom,
        }
    }

    /// Advance auto-rotation by `dt` seconds and clamp the distance.
    ///
    /// One full turn takes `60 / speed` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw = wrap_angle(self.yaw - auto_rotate_step(self.auto_rotate_speed, dt));
        }
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Rotate by a pointer drag in pixels. Returns whether it was applied.
    pub fn drag(&mut self, dx: f32, dy: f32) -> bool {
        if !self.enable_rotate {
            return false;
        }
        self.yaw = wrap_angle(self.yaw - dx * DRAG_SENSITIVITY);
        self.pitch = clamp_pitch(self.pitch + dy * DRAG_SENSITIVITY);
        true
    }

    /// Zoom by wheel lines; positive zooms in. Returns whether it was applied.
    pub fn scroll(&mut self, lines: f32) -> bool {
        if !self.enable_zoom {
            return false;
        }
        let factor = (-lines * ZOOM_SENSITIVITY).exp();
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        true
    }

    /// Recompute the aspect ratio; a zero height counts as one pixel.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        [
            self.target[0] + horizontal * self.yaw.sin(),
            self.target[1] + self.distance * self.pitch.sin(),
            self.target[2] + horizontal * self.yaw.cos(),
        ]
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.eye(), self.target, [0.0, 1.0, 0.0])
    }

    pub fn projection(&self) -> Mat4 {
        matrix::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        matrix::mul(&self.projection(), &self.view())
    }

    /// World-space view rays: `forward` plus the `right` and `up` vectors
    /// scaled so `forward + x * right + y * up` passes through NDC `(x, y)`.
    pub fn ray_basis(&self) -> [Vec3; 3] {
        let forward = matrix::normalize(matrix::sub(self.target, self.eye()));
        let right = matrix::normalize(matrix::cross(forward, [0.0, 1.0, 0.0]));
        let up = matrix::cross(right, forward);
        let half_height = (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;
        [
            forward,
            right.map(|c| c * half_width),
            up.map(|c| c * half_height),
        ]
    }
}

/// Yaw change for `dt` seconds of auto-rotation at `speed`.
pub fn auto_rotate_step(speed: f32, dt: f32) -> f32 {
    TAU / 60.0 * speed * dt
}

/// (yaw, pitch, distance) of an offset from the target.
fn spherical(offset: Vec3) -> (f32, f32, f32) {
    let distance = matrix::dot(offset, offset).sqrt();
    if distance <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let yaw = offset[0].atan2(offset[2]);
    let pitch = (offset[1] / distance).clamp(-1.0, 1.0).asin();
    (yaw, pitch, distance)
}

fn clamp_pitch(pitch: f32) -> f32 {
    let limit = FRAC_PI_2 - POLE_MARGIN;
    pitch.clamp(-limit, limit)
}

fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}
