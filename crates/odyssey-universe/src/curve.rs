//! Quadratic Bézier curves with arc-length sampling.

use odyssey_common::Vec3;

/// Resolution of the arc-length table used for even spacing.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
}

impl QuadraticBezier {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Point at curve parameter `t` in `[0, 1]`.
    pub fn point(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        let a = u * u;
        let b = 2.0 * u * t;
        let c = t * t;
        [
            a * self.p0[0] + b * self.p1[0] + c * self.p2[0],
            a * self.p0[1] + b * self.p1[1] + c * self.p2[1],
            a * self.p0[2] + b * self.p1[2] + c * self.p2[2],
        ]
    }

    /// Cumulative chord lengths at `divisions + 1` evenly spaced `t` values.
    pub fn arc_lengths(&self, divisions: usize) -> Vec<f32> {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut last = self.p0;
        let mut sum = 0.0;
        lengths.push(0.0);
        for i in 1..=divisions {
            let current = self.point(i as f32 / divisions as f32);
            sum += distance(last, current);
            lengths.push(sum);
            last = current;
        }
        lengths
    }

    /// Map a fraction of arc length `u` to the curve parameter `t`.
    pub fn u_to_t(&self, u: f32, lengths: &[f32]) -> f32 {
        let total = lengths.last().copied().unwrap_or(0.0);
        if lengths.len() < 2 || total <= f32::EPSILON {
            return u.clamp(0.0, 1.0);
        }

        let target = u.clamp(0.0, 1.0) * total;
        let divisions = lengths.len() - 1;
        let upper = lengths.partition_point(|&l| l < target).clamp(1, divisions);
        let lower = upper - 1;

        let segment = lengths[upper] - lengths[lower];
        let fraction = if segment > 0.0 {
            (target - lengths[lower]) / segment
        } else {
            0.0
        };
        (lower as f32 + fraction) / divisions as f32
    }

    /// `divisions + 1` points spaced evenly along the curve's length,
    /// starting at `p0` and ending at `p2`.
    pub fn spaced_points(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        let lengths = self.arc_lengths(ARC_LENGTH_DIVISIONS);
        let mut points: Vec<Vec3> = (0..=divisions)
            .map(|i| self.point(self.u_to_t(i as f32 / divisions as f32, &lengths)))
            .collect();
        points[0] = self.p0;
        points[divisions] = self.p2;
        points
    }
}

fn distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arch() -> QuadraticBezier {
        QuadraticBezier::new([-10.0, 0.0, 0.0], [0.0, 8.0, 0.0], [10.0, 0.0, 0.0])
    }

    #[test]
    fn point_hits_endpoints() {
        let c = arch();
        assert_eq!(c.point(0.0), c.p0);
        assert_eq!(c.point(1.0), c.p2);
        assert_eq!(c.point(0.5), [0.0, 4.0, 0.0]);
    }

    #[test]
    fn straight_line_length() {
        let c = QuadraticBezier::new([0.0; 3], [1.5, 0.0, 0.0], [3.0, 0.0, 0.0]);
        let lengths = c.arc_lengths(ARC_LENGTH_DIVISIONS);
        assert!((lengths[ARC_LENGTH_DIVISIONS] - 3.0).abs() < 1e-4);
    }

    #[test]
    fn spaced_points_start_and_end_on_the_endpoints() {
        let c = arch();
        let points = c.spaced_points(20);
        assert_eq!(points.len(), 21);
        assert_eq!(points[0], c.p0);
        assert_eq!(points[20], c.p2);
    }

    #[test]
    fn spaced_points_are_evenly_spaced() {
        let c = arch();
        let points = c.spaced_points(20);
        let gaps: Vec<f32> = points.windows(2).map(|w| distance(w[0], w[1])).collect();
        let mean = gaps.iter().sum::<f32>() / gaps.len() as f32;
        for gap in gaps {
            assert!((gap - mean).abs() / mean < 0.02, "gap {gap} vs mean {mean}");
        }
    }

    #[test]
    fn degenerate_curve_does_not_divide_by_zero() {
        let c = QuadraticBezier::new([1.0; 3], [1.0; 3], [1.0; 3]);
        let points = c.spaced_points(4);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| *p == [1.0; 3]));
    }
}
