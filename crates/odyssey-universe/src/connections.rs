//! Curved connection lines between odysseys.

use std::collections::HashMap;

use odyssey_common::Vec3;
use odyssey_config::schema::ConnectionConfig;
use rand::Rng;

use crate::curve::QuadraticBezier;
use crate::odyssey::Odyssey;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    /// Control point height is uniform in `[-max_height, max_height]`.
    pub max_height: f32,
    /// Segments per curve; each curve yields `segments + 1` points.
    pub segments: usize,
}

impl CurveSettings {
    pub fn from_config(config: &ConnectionConfig) -> Self {
        Self {
            max_height: config.max_line_height,
            segments: (config.segments as usize).max(1),
        }
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self::from_config(&ConnectionConfig::default())
    }
}

/// One sampled connection curve, ready to be drawn as a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionCurve {
    pub from: u32,
    pub to: u32,
    pub control: Vec3,
    pub points: Vec<Vec3>,
}

/// Build one curve per connection whose target id exists in `odysseys`.
///
/// When ids repeat, the first odyssey with that id is the target.
/// Connections to missing ids produce nothing.
pub fn build_curves<R: Rng + ?Sized>(
    odysseys: &[Odyssey],
    settings: &CurveSettings,
    rng: &mut R,
) -> Vec<ConnectionCurve> {
    let mut by_id: HashMap<u32, usize> = HashMap::with_capacity(odysseys.len());
    for (index, odyssey) in odysseys.iter().enumerate() {
        by_id.entry(odyssey.id).or_insert(index);
    }

    let mut curves = Vec::new();
    let mut dangling = 0usize;
    for source in odysseys {
        for connection in &source.connections {
            let Some(&target) = by_id.get(&connection.id) else {
                dangling += 1;
                continue;
            };
            let start = source.position;
            let end = odysseys[target].position;
            let control = control_point(start, end, settings.max_height, rng);
            let points = QuadraticBezier::new(start, control, end).spaced_points(settings.segments);
            curves.push(ConnectionCurve {
                from: source.id,
                to: connection.id,
                control,
                points,
            });
        }
    }

    if dangling > 0 {
        tracing::debug!(dangling, "skipped connections to unknown odysseys");
    }
    curves
}

/// Horizontal midpoint of the endpoints, lifted or lowered by a random
/// amount up to `max_height`.
fn control_point<R: Rng + ?Sized>(start: Vec3, end: Vec3, max_height: f32, rng: &mut R) -> Vec3 {
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let height = rng.gen::<f32>() * max_height * sign;
    [(start[0] + end[0]) / 2.0, height, (start[2] + end[2]) / 2.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(id: u32, position: Vec3) -> Odyssey {
        let mut o = Odyssey::new(id, "w", "n", "u", 0);
        o.position = position;
        o
    }

    fn settings() -> CurveSettings {
        CurveSettings {
            max_height: 8.0,
            segments: 20,
        }
    }

    #[test]
    fn existing_target_yields_one_curve() {
        let mut a = at(1, [7.0, 0.0, 0.0]);
        let b = at(2, [-7.0, 0.0, 0.0]);
        a.connect(2);

        let curves = build_curves(&[a, b], &settings(), &mut StdRng::seed_from_u64(1));
        assert_eq!(curves.len(), 1);
        let curve = &curves[0];
        assert_eq!((curve.from, curve.to), (1, 2));
        assert_eq!(curve.points.len(), 21);
        assert_eq!(curve.points[0], [7.0, 0.0, 0.0]);
        assert_eq!(curve.points[20], [-7.0, 0.0, 0.0]);
        assert_eq!(curve.control[0], 0.0);
        assert_eq!(curve.control[2], 0.0);
    }

    #[test]
    fn missing_target_is_skipped() {
        let mut a = at(1, [7.0, 0.0, 0.0]);
        a.connect(500);
        let curves = build_curves(&[a], &settings(), &mut StdRng::seed_from_u64(2));
        assert!(curves.is_empty());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let mut a = at(1, [0.0, 0.0, 0.0]);
        let first = at(5, [4.0, 0.0, 0.0]);
        let second = at(5, [-4.0, 0.0, 0.0]);
        a.connect(5);

        let curves = build_curves(&[a, first, second], &settings(), &mut StdRng::seed_from_u64(3));
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].points[20], [4.0, 0.0, 0.0]);
    }

    #[test]
    fn self_connection_still_draws() {
        let mut a = at(3, [2.0, 0.0, 2.0]);
        a.connect(3);
        let curves = build_curves(&[a], &settings(), &mut StdRng::seed_from_u64(4));
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].points[0], curves[0].points[20]);
    }

    #[test]
    fn control_height_stays_within_limit() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut saw_negative = false;
        for _ in 0..500 {
            let c = control_point([1.0, 0.0, 1.0], [3.0, 0.0, 3.0], 8.0, &mut rng);
            assert!(c[1].abs() <= 8.0);
            assert_eq!([c[0], c[2]], [2.0, 2.0]);
            saw_negative |= c[1] < 0.0;
        }
        assert!(saw_negative);
    }

    #[test]
    fn settings_never_have_zero_segments() {
        let config = ConnectionConfig {
            segments: 0,
            ..ConnectionConfig::default()
        };
        assert_eq!(CurveSettings::from_config(&config).segments, 1);
    }
}
