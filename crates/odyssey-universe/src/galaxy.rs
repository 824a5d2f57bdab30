//! Spiral galaxy point-field generation.
//!
//! Points are spread along `branches` arms. Each arm winds further the
//! farther a point sits from the center, and every axis gets a jitter of
//! `random^randomness_power` so most points hug the arm while a few
//! stray far from it.

use std::f32::consts::TAU;
use std::time::Instant;

use odyssey_common::Vec3;
use odyssey_config::schema::GalaxyConfig;
use rand::Rng;

/// Generation parameters for the galaxy field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParams {
    pub count: u32,
    /// Sprite size; used by the renderer, not by generation.
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    /// Kept with the other parameters so a change triggers regeneration;
    /// the point formula does not read it.
    pub randomness: f32,
    pub randomness_power: f32,
    pub y_height: f32,
}

impl From<&GalaxyConfig> for GalaxyParams {
    fn from(config: &GalaxyConfig) -> Self {
        Self {
            count: config.count,
            size: config.size,
            radius: config.radius,
            branches: config.branches,
            spin: config.spin,
            randomness: config.randomness,
            randomness_power: config.randomness_power,
            y_height: config.y_height,
        }
    }
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self::from(&GalaxyConfig::default())
    }
}

impl GalaxyParams {
    /// Largest horizontal distance from the center a point can reach:
    /// the disc radius plus the worst-case jitter on both horizontal axes.
    pub fn horizontal_bound(&self) -> f32 {
        self.radius + std::f32::consts::SQRT_2
    }
}

/// Generate `params.count` points of the spiral galaxy.
pub fn generate_points<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> Vec<Vec3> {
    let branches = params.branches.max(1);

    (0..params.count)
        .map(|i| {
            let radius = rng.gen::<f32>() * params.radius;
            let spin_angle = radius * params.spin;
            let branch_angle = (i % branches) as f32 / branches as f32 * TAU;

            let jitter_x = jitter(rng, params.randomness_power, 1.0);
            let jitter_y = jitter(rng, params.randomness_power, params.y_height);
            let jitter_z = jitter(rng, params.randomness_power, 1.0);

            let angle = branch_angle + spin_angle;
            [
                angle.cos() * radius + jitter_x,
                jitter_y,
                angle.sin() * radius + jitter_z,
            ]
        })
        .collect()
}

/// `random^power`, scaled and sign-flipped with even odds.
fn jitter<R: Rng + ?Sized>(rng: &mut R, power: f32, scale: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powf(power);
    if rng.gen_bool(0.5) {
        magnitude * scale
    } else {
        -magnitude * scale
    }
}

/// The current galaxy point buffer and the parameters that produced it.
#[derive(Debug, Clone)]
pub struct GalaxyField {
    params: GalaxyParams,
    positions: Vec<Vec3>,
    generation: u64,
}

impl GalaxyField {
    pub fn generate<R: Rng + ?Sized>(params: GalaxyParams, rng: &mut R) -> Self {
        let mut field = Self {
            params,
            positions: Vec::new(),
            generation: 0,
        };
        field.regenerate(params, rng);
        field
    }

    /// Replace the whole point buffer. The previous buffer is freed before
    /// the new one is allocated.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, params: GalaxyParams, rng: &mut R) {
        let started = Instant::now();
        self.positions = Vec::new();
        self.positions = generate_points(&params, rng);
        self.params = params;
        self.generation += 1;
        tracing::debug!(
            count = self.positions.len(),
            generation = self.generation,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "galaxy field generated"
        );
    }

    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Incremented on every regeneration; starts at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_params() -> GalaxyParams {
        GalaxyParams {
            count: 5_000,
            ..GalaxyParams::default()
        }
    }

    #[test]
    fn produces_exactly_count_points() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [100, 1_234, 5_000] {
            let params = GalaxyParams {
                count,
                ..small_params()
            };
            assert_eq!(generate_points(&params, &mut rng).len(), count as usize);
        }
    }

    #[test]
    fn points_stay_within_jittered_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = GalaxyParams {
            radius: 37.0,
            y_height: 12.0,
            randomness_power: 1.0,
            ..small_params()
        };
        let bound = params.horizontal_bound();
        for [x, y, z] in generate_points(&params, &mut rng) {
            assert!((x * x + z * z).sqrt() <= bound + 1e-4);
            assert!(y.abs() <= params.y_height);
        }
    }

    #[test]
    fn high_power_concentrates_points_near_the_plane() {
        let mut rng = StdRng::seed_from_u64(13);
        let params = small_params();
        let points = generate_points(&params, &mut rng);
        let near_plane = points.iter().filter(|p| p[1].abs() < 0.5).count();
        // random^6 puts most of the mass close to zero.
        assert!(near_plane as f32 > points.len() as f32 * 0.5);
    }

    #[test]
    fn zero_jitter_points_lie_on_their_branch() {
        let mut rng = StdRng::seed_from_u64(17);
        // A huge exponent drives every jitter to ~0.
        let params = GalaxyParams {
            count: 300,
            branches: 3,
            spin: 0.0,
            randomness_power: 1.0e6,
            ..GalaxyParams::default()
        };
        for (i, [x, _, z]) in generate_points(&params, &mut rng).into_iter().enumerate() {
            let r = (x * x + z * z).sqrt();
            if r < 1.0 {
                continue;
            }
            let expected = (i as u32 % 3) as f32 / 3.0 * TAU;
            let actual = z.atan2(x).rem_euclid(TAU);
            let diff = (actual - expected).abs();
            assert!(diff < 1e-2 || (TAU - diff) < 1e-2, "point {i} off branch");
        }
    }

    #[test]
    fn zero_branches_is_guarded() {
        let mut rng = StdRng::seed_from_u64(19);
        let params = GalaxyParams {
            count: 10,
            branches: 0,
            ..GalaxyParams::default()
        };
        assert_eq!(generate_points(&params, &mut rng).len(), 10);
    }

    #[test]
    fn same_seed_same_field() {
        let a = generate_points(&small_params(), &mut StdRng::seed_from_u64(23));
        let b = generate_points(&small_params(), &mut StdRng::seed_from_u64(23));
        assert_eq!(a, b);
    }

    #[test]
    fn regenerate_replaces_buffer_and_bumps_generation() {
        let mut rng = StdRng::seed_from_u64(29);
        let mut field = GalaxyField::generate(small_params(), &mut rng);
        assert_eq!(field.generation(), 1);
        assert_eq!(field.len(), 5_000);

        let smaller = GalaxyParams {
            count: 200,
            branches: 7,
            ..small_params()
        };
        field.regenerate(smaller, &mut rng);
        assert_eq!(field.generation(), 2);
        assert_eq!(field.len(), 200);
        assert_eq!(field.params().branches, 7);
    }

    #[test]
    fn params_from_config() {
        let config = GalaxyConfig {
            count: 4242,
            spin: -2.0,
            ..GalaxyConfig::default()
        };
        let params = GalaxyParams::from(&config);
        assert_eq!(params.count, 4242);
        assert!((params.spin + 2.0).abs() < f32::EPSILON);
        assert!((params.size - 0.001).abs() < f32::EPSILON);
    }
}
