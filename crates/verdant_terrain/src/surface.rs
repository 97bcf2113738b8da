use crate::coords::CoordinateMap;
use crate::terrain::HeightField;
use serde::{Deserialize, Serialize};
use verdant_procgen::Grid;

/// Height band of a terrain cell, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    Water,
    Beach,
    Ground,
    Mountain,
}

/// Height thresholds, in world units, separating the bands.
///
/// The values are never checked against each other. Classification is a
/// plain sequence of comparisons, so unusual orderings still give a band,
/// just a degenerate one (for example no Ground when `mountain_height` sits
/// below the shoreline).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceThresholds {
    pub water_height: f32,
    pub beach_size: f32,
    pub mountain_height: f32,
}

impl SurfaceThresholds {
    pub fn new(water_height: f32, beach_size: f32, mountain_height: f32) -> Self {
        Self {
            water_height,
            beach_size,
            mountain_height,
        }
    }

    /// Top of the beach
    pub fn shoreline(&self) -> f32 {
        self.water_height + self.beach_size
    }

    pub fn band(&self, height: f32) -> Band {
        if height < self.water_height {
            Band::Water
        } else if height < self.shoreline() {
            Band::Beach
        } else if height < self.mountain_height {
            Band::Ground
        } else {
            Band::Mountain
        }
    }

    /// Strictly between the shoreline and the mountain line, where grass
    /// and trees grow
    pub fn is_vegetated(&self, height: f32) -> bool {
        height > self.shoreline() && height < self.mountain_height
    }

    pub fn is_ordered(&self) -> bool {
        self.beach_size >= 0.0 && self.shoreline() <= self.mountain_height
    }
}

/// Height, slope and band of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub height: f32,
    pub steepness_degrees: f32,
    pub band: Band,
}

/// Classify layer cell `(x, y)`.
///
/// Height comes from the nearest heightmap sample under the cell, steepness
/// from the continuous surface at the cell's normalized coordinate.
pub fn classify<F: HeightField + ?Sized>(
    field: &F,
    map: &CoordinateMap,
    x: usize,
    y: usize,
    thresholds: &SurfaceThresholds,
) -> SurfaceSample {
    let (hx, hy) = map.to_heightmap(x, y);
    let height = field.height(hx, hy);

    let normalized = map.normalize(x, y);
    let steepness_degrees = field.steepness(normalized.x, normalized.y);

    SurfaceSample {
        height,
        steepness_degrees,
        band: thresholds.band(height),
    }
}

/// Classify every cell of the layer described by `map`
pub fn classify_layer<F: HeightField + ?Sized>(
    field: &F,
    map: &CoordinateMap,
    thresholds: &SurfaceThresholds,
) -> Grid<SurfaceSample> {
    if !thresholds.is_ordered() {
        log::warn!(
            "Surface thresholds out of order (water {}, beach {}, mountain {}); bands will be degenerate",
            thresholds.water_height,
            thresholds.beach_size,
            thresholds.mountain_height
        );
    }

    let (width, height) = map.layer_size();
    Grid::from_fn(width, height, |x, y| classify(field, map, x, y, thresholds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{Terrain, TerrainDimensions};
    use glam::Vec3;

    fn thresholds() -> SurfaceThresholds {
        SurfaceThresholds::new(10.0, 2.0, 40.0)
    }

    #[test]
    fn test_band_boundaries() {
        let t = thresholds();
        assert_eq!(t.band(-5.0), Band::Water);
        assert_eq!(t.band(9.99), Band::Water);
        assert_eq!(t.band(10.0), Band::Beach);
        assert_eq!(t.band(11.99), Band::Beach);
        assert_eq!(t.band(12.0), Band::Ground);
        assert_eq!(t.band(39.99), Band::Ground);
        assert_eq!(t.band(40.0), Band::Mountain);
        assert_eq!(t.band(1000.0), Band::Mountain);
    }

    #[test]
    fn test_band_monotonic_in_height() {
        let t = thresholds();
        let mut previous = Band::Water;
        let mut seen = vec![previous];
        for i in 0..600 {
            let band = t.band(i as f32 * 0.1);
            assert!(band >= previous);
            if band != previous {
                seen.push(band);
            }
            previous = band;
        }
        assert_eq!(seen, vec![Band::Water, Band::Beach, Band::Ground, Band::Mountain]);
    }

    #[test]
    fn test_unordered_thresholds_stay_defined() {
        // Mountain line below the water line: nothing is ever Ground
        let t = SurfaceThresholds::new(20.0, 5.0, 10.0);
        assert!(!t.is_ordered());
        assert_eq!(t.band(5.0), Band::Water);
        assert_eq!(t.band(22.0), Band::Beach);
        assert_eq!(t.band(30.0), Band::Mountain);
        assert!(!t.is_vegetated(30.0));
    }

    #[test]
    fn test_vegetated_is_strict() {
        let t = thresholds();
        assert!(!t.is_vegetated(12.0));
        assert!(t.is_vegetated(12.01));
        assert!(!t.is_vegetated(40.0));
    }

    #[test]
    fn test_classify_translates_coordinates() {
        // Height grows with the heightmap column so the source sample is visible
        let heights = Grid::from_fn(9, 9, |x, _| x as f32 / 8.0);
        let terrain = Terrain::new(TerrainDimensions::new(9, Vec3::new(16.0, 16.0, 16.0)), heights).unwrap();
        let map = CoordinateMap::new(9, 3, 3).unwrap();

        // ratio 3: layer column 2 reads heightmap column 6
        let sample = classify(&terrain, &map, 2, 1, &thresholds());
        assert_eq!(sample.height, 12.0);
        assert_eq!(sample.band, Band::Ground);
        // 16 up over 16 across
        assert!((sample.steepness_degrees - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_classify_layer_shape() {
        let terrain = Terrain::new(
            TerrainDimensions::new(5, Vec3::new(10.0, 10.0, 10.0)),
            Grid::new(5, 5, 0.5),
        )
        .unwrap();
        let map = CoordinateMap::new(5, 7, 4).unwrap();
        let samples = classify_layer(&terrain, &map, &thresholds());

        assert_eq!(samples.dimensions(), (7, 4));
        assert!(samples.cells().iter().all(|s| s.band == Band::Water && s.steepness_degrees == 0.0));
    }
}
