//! The assembled odyssey population: center, rings and connection curves.

use odyssey_config::schema::UniverseConfig;
use rand::Rng;

use crate::connections::{build_curves, ConnectionCurve, CurveSettings};
use crate::factory::OdysseyFactory;
use crate::layout::{Ring, RingLayout};
use crate::odyssey::Odyssey;

#[derive(Debug, Clone, Default)]
pub struct Universe {
    /// Fixed odyssey at the origin, not part of any ring.
    pub center: Option<Odyssey>,
    pub odysseys: Vec<Odyssey>,
    pub rings: Vec<Ring>,
    pub curves: Vec<ConnectionCurve>,
}

impl Universe {
    /// Generate, place and connect the whole population.
    ///
    /// `palette_len` is the number of textures available to draw from.
    pub fn build<R: Rng + ?Sized>(config: &UniverseConfig, palette_len: usize, rng: &mut R) -> Self {
        let factory = OdysseyFactory::new(palette_len);
        let center = config.show_center.then(|| factory.center(rng));

        let mut odysseys = factory.populate(config.odyssey_count, rng);
        let rings = RingLayout::from_config(config).arrange(&mut odysseys, config.odyssey_count, rng);
        let curves = build_curves(
            &odysseys,
            &CurveSettings::from_config(&config.connections),
            rng,
        );

        tracing::info!(
            odysseys = odysseys.len(),
            rings = rings.len(),
            curves = curves.len(),
            "universe built"
        );
        for odyssey in &odysseys {
            tracing::trace!("{odyssey}");
        }

        Self {
            center,
            odysseys,
            rings,
            curves,
        }
    }

    /// Every odyssey with a position in the scene, center first.
    pub fn placed(&self) -> impl Iterator<Item = &Odyssey> {
        self.center.iter().chain(self.odysseys.iter())
    }

    pub fn line_vertex_count(&self) -> usize {
        self.curves.iter().map(|c| c.points.len()).sum()
    }
}
