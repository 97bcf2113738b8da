use crate::noise_field::{FractalSettings, NoiseField};
use crate::terrain::{Terrain, TerrainDimensions};
use glam::Vec3;
use verdant_procgen::{GenerationError, Grid, Result};

/// Square raster of raw elevation samples in `[0, 1]`
pub type Heightmap = Grid<f32>;

/// Fills heightmaps from a [`NoiseField`]
#[derive(Debug, Clone, Default)]
pub struct HeightmapGenerator {
    noise: NoiseField,
    fractal: FractalSettings,
}

impl HeightmapGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fractal(fractal: FractalSettings) -> Self {
        Self {
            noise: NoiseField::new(),
            fractal,
        }
    }

    /// Generate a `resolution x resolution` heightmap.
    ///
    /// Sample `(x, y)` reads the noise field at
    /// `(x / trunc(size.x) * scale, y / trunc(size.z) * scale)` shifted by
    /// `seed`. Only the footprint of `size` is used. The same arguments
    /// always produce the same heightmap.
    pub fn generate(&self, resolution: usize, scale: f32, seed: u8, size: Vec3) -> Result<Heightmap> {
        TerrainDimensions::new(resolution, size).validate()?;
        self.fractal.validate()?;
        if !scale.is_finite() {
            return Err(GenerationError::invalid("scale", format!("must be finite, got {scale}")));
        }

        let extent_x = f64::from(size.x.trunc());
        let extent_z = f64::from(size.z.trunc());
        let scale = f64::from(scale);

        let heights = Grid::from_fn(resolution, resolution, |x, y| {
            let coord_x = x as f64 / extent_x * scale;
            let coord_y = y as f64 / extent_z * scale;
            self.noise.sample_fractal(coord_x, coord_y, seed, &self.fractal)
        });

        log::debug!(
            "Generated {}x{} heightmap (scale {}, seed {})",
            resolution,
            resolution,
            scale,
            seed
        );
        Ok(heights)
    }

    /// Generate a heightmap and wrap it with its dimensions
    pub fn generate_terrain(&self, dimensions: TerrainDimensions, scale: f32, seed: u8) -> Result<Terrain> {
        let heights = self.generate(dimensions.heightmap_resolution, scale, seed, dimensions.size())?;
        Terrain::new(dimensions, heights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> Vec3 {
        Vec3::new(100.0, 30.0, 100.0)
    }

    #[test]
    fn test_small_heightmap_is_reproducible() {
        let generator = HeightmapGenerator::new();
        let first = generator.generate(4, 1.0, 0, size()).unwrap();
        let second = generator.generate(4, 1.0, 0, size()).unwrap();

        assert_eq!(first.dimensions(), (4, 4));
        let first_bits: Vec<u32> = first.cells().iter().map(|h| h.to_bits()).collect();
        let second_bits: Vec<u32> = second.cells().iter().map(|h| h.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_values_in_unit_range() {
        let generator = HeightmapGenerator::new();
        for seed in [0, 77, 254] {
            let heights = generator.generate(65, 12.0, seed, size()).unwrap();
            assert!(heights.cells().iter().all(|h| (0.0..=1.0).contains(h)));
        }
    }

    #[test]
    fn test_matches_noise_field() {
        let generator = HeightmapGenerator::new();
        let noise = NoiseField::new();
        let heights = generator.generate(9, 5.0, 12, Vec3::new(80.7, 10.0, 40.2)).unwrap();

        // Footprint is truncated to 80 x 40
        let expected = noise.sample(3.0 / 80.0 * 5.0, 7.0 / 40.0 * 5.0, 12);
        assert_eq!(heights[(3, 7)], expected);
    }

    #[test]
    fn test_seed_changes_terrain() {
        let generator = HeightmapGenerator::new();
        let a = generator.generate(33, 8.0, 1, size()).unwrap();
        let b = generator.generate(33, 8.0, 2, size()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_neighbouring_samples_are_close() {
        let generator = HeightmapGenerator::new();
        let heights = generator.generate(129, 4.0, 9, Vec3::new(128.0, 30.0, 128.0)).unwrap();
        for y in 0..129 {
            for x in 0..128 {
                assert!((heights[(x, y)] - heights[(x + 1, y)]).abs() < 0.1);
            }
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        let generator = HeightmapGenerator::new();
        assert!(generator.generate(1, 1.0, 0, size()).is_err());
        assert!(generator.generate(0, 1.0, 0, size()).is_err());
        assert!(generator.generate(8, f32::NAN, 0, size()).is_err());
        assert!(generator.generate(8, 1.0, 0, Vec3::new(0.0, 1.0, 10.0)).is_err());
    }

    #[test]
    fn test_huge_scale_still_yields_unit_heights() {
        let generator = HeightmapGenerator::new();
        for scale in [1e30, -1e30, f32::MAX] {
            let heights = generator.generate(4, scale, 0, size()).unwrap();
            assert!(heights.cells().iter().all(|h| (0.0..=1.0).contains(h)), "scale {scale}");
        }
    }

    #[test]
    fn test_rejects_runaway_fractal() {
        let generator = HeightmapGenerator::with_fractal(FractalSettings {
            octaves: 3,
            lacunarity: 1e300,
            ..Default::default()
        });
        assert!(generator.generate(9, 1.0, 3, size()).is_ok());

        let generator = HeightmapGenerator::with_fractal(FractalSettings {
            octaves: 3,
            lacunarity: f64::INFINITY,
            ..Default::default()
        });
        assert!(generator.generate(9, 1.0, 3, size()).is_err());
    }

    #[test]
    fn test_generate_terrain() {
        let generator = HeightmapGenerator::new();
        let terrain = generator
            .generate_terrain(TerrainDimensions::new(17, size()), 3.0, 4)
            .unwrap();
        assert_eq!(terrain.heights().dimensions(), (17, 17));
    }
}
