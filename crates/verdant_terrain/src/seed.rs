use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random streams the terrain pipeline draws from, one per layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamLayer {
    Trees,
    Buildings,
}

impl StreamLayer {
    pub fn id(self) -> u32 {
        match self {
            StreamLayer::Trees => 1,
            StreamLayer::Buildings => 2,
        }
    }
}

/// Seed for one terrain generation run.
///
/// The noise field consumes the byte directly as a coordinate offset.
/// Random draws (tree rotation, building rolls) come from per-layer
/// sub-streams derived from it, so layers never share a stream and a run
/// can be replayed from the seed alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerrainSeed {
    pub value: u8,
}

impl TerrainSeed {
    pub fn new(seed: u8) -> Self {
        Self { value: seed }
    }

    /// Draw a seed in `0..255`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..255))
    }

    /// Mix `value` into `seed` with the golden-ratio constant
    pub fn hash_combine(seed: u32, value: u32) -> u32 {
        seed ^ (value
            .wrapping_add(0x9e3779b9)
            .wrapping_add(seed << 6)
            .wrapping_add(seed >> 2))
    }

    /// Fold several values into this seed
    pub fn combine_multiple(&self, values: &[u32]) -> u32 {
        values
            .iter()
            .fold(u32::from(self.value), |seed, &value| Self::hash_combine(seed, value))
    }

    /// Independent deterministic stream for one layer
    pub fn stream(&self, layer: StreamLayer) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(u64::from(self.combine_multiple(&[layer.id()])))
    }
}

impl From<u8> for TerrainSeed {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}
