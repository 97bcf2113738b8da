use crate::coords::CoordinateMap;
use crate::surface::{classify_layer, SurfaceSample, SurfaceThresholds};
use crate::terrain::HeightField;
use verdant_procgen::{Grid, Result};

/// Binary grass density, 1 where grass grows
pub type DetailGrid = Grid<u8>;

/// Per-cell texture blend weights
pub type SplatGrid = Grid<SplatWeights>;

/// Slope at which a cell is fully rock
pub const ROCK_SLOPE_DEGREES: f32 = 45.0;

/// Blend weights for the grass, rock and sand textures.
///
/// Grass and rock split the cell by slope; sand is independent of them, so
/// the channels need not sum to one. Slopes beyond [`ROCK_SLOPE_DEGREES`]
/// push rock above one and grass below zero; use [`SplatWeights::clamped`]
/// when the consumer expects `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplatWeights(pub [f32; 3]);

impl SplatWeights {
    pub fn grass(&self) -> f32 {
        self.0[0]
    }

    pub fn rock(&self) -> f32 {
        self.0[1]
    }

    pub fn sand(&self) -> f32 {
        self.0[2]
    }

    pub fn clamped(&self) -> Self {
        Self(self.0.map(|w| w.clamp(0.0, 1.0)))
    }
}

pub fn grass_density(sample: &SurfaceSample, thresholds: &SurfaceThresholds) -> u8 {
    u8::from(thresholds.is_vegetated(sample.height))
}

pub fn splat_weights(sample: &SurfaceSample, thresholds: &SurfaceThresholds) -> SplatWeights {
    let rock = sample.steepness_degrees / ROCK_SLOPE_DEGREES;
    let sand = if sample.height < thresholds.shoreline() { 1.0 } else { 0.0 };
    SplatWeights([1.0 - rock, rock, sand])
}

/// Grass density from already classified cells
pub fn grass_from_samples(samples: &Grid<SurfaceSample>, thresholds: &SurfaceThresholds) -> DetailGrid {
    samples.map(|sample| grass_density(sample, thresholds))
}

/// Splat weights from already classified cells
pub fn splat_from_samples(samples: &Grid<SurfaceSample>, thresholds: &SurfaceThresholds) -> SplatGrid {
    samples.map(|sample| splat_weights(sample, thresholds))
}

/// Classify a `width x height` detail layer over `field` and derive grass
pub fn grass_layer<F: HeightField + ?Sized>(
    field: &F,
    width: usize,
    height: usize,
    thresholds: &SurfaceThresholds,
) -> Result<DetailGrid> {
    let map = CoordinateMap::new(field.resolution(), width, height)?;
    let grass = grass_from_samples(&classify_layer(field, &map, thresholds), thresholds);

    log::debug!(
        "Grass layer {}x{}: {} cells covered",
        width,
        height,
        grass.cells().iter().filter(|&&d| d == 1).count()
    );
    Ok(grass)
}

/// Classify a `width x height` alpha layer over `field` and derive splat weights
pub fn splat_layer<F: HeightField + ?Sized>(
    field: &F,
    width: usize,
    height: usize,
    thresholds: &SurfaceThresholds,
) -> Result<SplatGrid> {
    let map = CoordinateMap::new(field.resolution(), width, height)?;
    let splat = splat_from_samples(&classify_layer(field, &map, thresholds), thresholds);

    log::debug!("Splat layer {}x{} generated", width, height);
    Ok(splat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{Terrain, TerrainDimensions};
    use glam::Vec3;

    fn thresholds() -> SurfaceThresholds {
        SurfaceThresholds::new(10.0, 2.0, 40.0)
    }

    fn sample(height: f32, steepness_degrees: f32) -> SurfaceSample {
        SurfaceSample {
            height,
            steepness_degrees,
            band: thresholds().band(height),
        }
    }

    #[test]
    fn test_grass_only_on_ground() {
        let t = thresholds();
        assert_eq!(grass_density(&sample(5.0, 0.0), &t), 0);
        assert_eq!(grass_density(&sample(11.0, 0.0), &t), 0);
        assert_eq!(grass_density(&sample(12.0, 0.0), &t), 0);
        assert_eq!(grass_density(&sample(20.0, 80.0), &t), 1);
        assert_eq!(grass_density(&sample(40.0, 0.0), &t), 0);
    }

    #[test]
    fn test_splat_channels() {
        let t = thresholds();

        let flat_beach = splat_weights(&sample(11.0, 0.0), &t);
        assert_eq!(flat_beach, SplatWeights([1.0, 0.0, 1.0]));

        let slope = splat_weights(&sample(20.0, 22.5), &t);
        assert_eq!(slope, SplatWeights([0.5, 0.5, 0.0]));
    }

    #[test]
    fn test_splat_is_unclamped() {
        let cliff = splat_weights(&sample(30.0, 90.0), &thresholds());
        assert_eq!(cliff.grass(), -1.0);
        assert_eq!(cliff.rock(), 2.0);
        assert_eq!(cliff.sand(), 0.0);
        assert_eq!(cliff.clamped(), SplatWeights([0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_layers_are_pure() {
        let samples = Grid::from_fn(6, 4, |x, y| sample(x as f32 * 7.0, y as f32 * 15.0));
        let t = thresholds();

        assert_eq!(grass_from_samples(&samples, &t), grass_from_samples(&samples, &t));
        assert_eq!(splat_from_samples(&samples, &t), splat_from_samples(&samples, &t));
    }

    #[test]
    fn test_layer_resolution_independent_of_heightmap() {
        // Left half underwater, right half ground
        let heights = Grid::from_fn(17, 17, |x, _| if x < 8 { 0.1 } else { 0.5 });
        let terrain = Terrain::new(TerrainDimensions::new(17, Vec3::new(64.0, 40.0, 64.0)), heights).unwrap();

        let grass = grass_layer(&terrain, 32, 8, &thresholds()).unwrap();
        assert_eq!(grass.dimensions(), (32, 8));
        // ratio 17/32: column 10 reads heightmap column 5, column 20 reads 10
        assert_eq!(grass[(10, 3)], 0);
        assert_eq!(grass[(20, 3)], 1);

        let splat = splat_layer(&terrain, 8, 8, &thresholds()).unwrap();
        assert_eq!(splat.dimensions(), (8, 8));
        assert_eq!(splat[(0, 0)].sand(), 1.0);
        assert_eq!(splat[(7, 7)].sand(), 0.0);
    }

    #[test]
    fn test_layers_reject_tiny_rasters() {
        let terrain = Terrain::new(
            TerrainDimensions::new(5, Vec3::splat(10.0)),
            Grid::new(5, 5, 0.0),
        )
        .unwrap();
        assert!(grass_layer(&terrain, 1, 5, &thresholds()).is_err());
        assert!(splat_layer(&terrain, 5, 0, &thresholds()).is_err());
    }
}
