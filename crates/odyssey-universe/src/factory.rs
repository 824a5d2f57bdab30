//! Odyssey construction with a random texture from the palette.

use rand::Rng;

use crate::odyssey::Odyssey;

/// Id of the fixed odyssey placed at the origin.
pub const CENTER_ODYSSEY_ID: u32 = 122;

const PLACEHOLDER_WALLET: &str = "Wallet Address";
const PLACEHOLDER_NAME: &str = "Frenkie world";
const PLACEHOLDER_URL: &str = "test.com";

/// Builds odysseys, each drawn with a uniformly random palette texture.
#[derive(Debug, Clone, Copy)]
pub struct OdysseyFactory {
    palette_len: usize,
}

impl OdysseyFactory {
    /// An empty palette is treated as a single (fallback) texture.
    pub fn new(palette_len: usize) -> Self {
        Self {
            palette_len: palette_len.max(1),
        }
    }

    pub fn palette_len(&self) -> usize {
        self.palette_len
    }

    pub fn create<R: Rng + ?Sized>(
        &self,
        id: u32,
        wallet: &str,
        name: &str,
        url: &str,
        rng: &mut R,
    ) -> Odyssey {
        let texture = rng.gen_range(0..self.palette_len);
        Odyssey::new(id, wallet, name, url, texture)
    }

    /// Build `count` odysseys with ids `0..count` and placeholder metadata.
    pub fn populate<R: Rng + ?Sized>(&self, count: u32, rng: &mut R) -> Vec<Odyssey> {
        (0..count)
            .map(|id| self.create(id, PLACEHOLDER_WALLET, PLACEHOLDER_NAME, PLACEHOLDER_URL, rng))
            .collect()
    }

    /// The odyssey shown at the origin, outside the ring layout.
    pub fn center<R: Rng + ?Sized>(&self, rng: &mut R) -> Odyssey {
        self.create(
            CENTER_ODYSSEY_ID,
            PLACEHOLDER_WALLET,
            PLACEHOLDER_NAME,
            PLACEHOLDER_URL,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn populate_assigns_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let odysseys = OdysseyFactory::new(5).populate(20, &mut rng);
        assert_eq!(odysseys.len(), 20);
        for (i, o) in odysseys.iter().enumerate() {
            assert_eq!(o.id, i as u32);
            assert_eq!(o.wallet, "Wallet Address");
            assert_eq!(o.name, "Frenkie world");
            assert_eq!(o.url, "test.com");
        }
    }

    #[test]
    fn textures_stay_inside_palette() {
        let mut rng = StdRng::seed_from_u64(2);
        let odysseys = OdysseyFactory::new(5).populate(500, &mut rng);
        assert!(odysseys.iter().all(|o| o.texture < 5));
        // 500 draws over 5 textures should hit every one.
        for t in 0..5 {
            assert!(odysseys.iter().any(|o| o.texture == t), "texture {t} never chosen");
        }
    }

    #[test]
    fn empty_palette_falls_back_to_single_texture() {
        let mut rng = StdRng::seed_from_u64(3);
        let factory = OdysseyFactory::new(0);
        assert_eq!(factory.palette_len(), 1);
        let o = factory.create(1, "w", "n", "u", &mut rng);
        assert_eq!(o.texture, 0);
    }

    #[test]
    fn center_has_fixed_id() {
        let mut rng = StdRng::seed_from_u64(4);
        let center = OdysseyFactory::new(5).center(&mut rng);
        assert_eq!(center.id, CENTER_ODYSSEY_ID);
        assert_eq!(center.position, [0.0; 3]);
    }

    #[test]
    fn populate_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(OdysseyFactory::new(5).populate(0, &mut rng).is_empty());
    }
}
