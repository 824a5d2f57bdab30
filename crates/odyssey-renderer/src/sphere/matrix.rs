//! 4×4 matrix and vector math for camera and instance transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Projection targets the
//! wgpu clip volume (depth in `0..1`, right-handed view space).

use odyssey_common::Vec3;

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection with a `0..1` depth range.
///
/// `fov_y` is vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        near * far * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix looking from `eye` towards `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize(sub(target, eye));
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// `m × (p, 1)` in homogeneous coordinates.
pub fn transform_point(m: &Mat4, p: Vec3) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Unit vector in the direction of `v`; the zero vector stays zero.
pub fn normalize(v: Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    if len <= f32::EPSILON {
        return [0.0; 3];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_points() {
        let t = translate(1.0, 2.0, 3.0);
        let p = transform_point(&t, [1.0, 1.0, 1.0]);
        assert!(approx_eq(&p, &[2.0, 3.0, 4.0, 1.0], 1e-6));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let near = transform_point(&p, [0.0, 0.0, -0.1]);
        let far = transform_point(&p, [0.0, 0.0, -100.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn look_at_puts_target_on_negative_z() {
        let view = look_at([0.0, 0.0, 10.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let p = transform_point(&view, [0.0; 3]);
        assert!(approx_eq(&p, &[0.0, 0.0, -10.0, 1.0], 1e-5));
    }

    #[test]
    fn look_at_keeps_up_vector_up() {
        let view = look_at([5.0, 5.0, 5.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let above = transform_point(&view, [0.0, 1.0, 0.0]);
        assert!(above[1] > 0.0);
    }

    #[test]
    fn normalize_handles_zero() {
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
        let n = normalize([3.0, 0.0, 4.0]);
        assert!(approx_eq(&n, &[0.6, 0.0, 0.8], 1e-6));
    }

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }
}
