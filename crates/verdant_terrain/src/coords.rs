use glam::Vec2;
use verdant_procgen::{require_raster_size, Result};

/// Maps cells of a derived raster (detail layer, splat map) onto the
/// heightmap it is derived from.
///
/// Heightmap and layer resolutions differ in general. A layer cell `(x, y)`
/// reads the heightmap at `trunc(x * ratio_x), trunc(y * ratio_y)` with
/// `ratio = heightmap_resolution / layer_size`, and queries steepness at its
/// own normalized coordinate `(x / (w - 1), y / (h - 1))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMap {
    heightmap_resolution: usize,
    layer_width: usize,
    layer_height: usize,
    ratio_x: f32,
    ratio_y: f32,
}

impl CoordinateMap {
    pub fn new(heightmap_resolution: usize, layer_width: usize, layer_height: usize) -> Result<Self> {
        require_raster_size("heightmap_resolution", heightmap_resolution)?;
        require_raster_size("layer_width", layer_width)?;
        require_raster_size("layer_height", layer_height)?;

        Ok(Self {
            heightmap_resolution,
            layer_width,
            layer_height,
            ratio_x: heightmap_resolution as f32 / layer_width as f32,
            ratio_y: heightmap_resolution as f32 / layer_height as f32,
        })
    }

    /// Map a heightmap onto itself
    pub fn identity(resolution: usize) -> Result<Self> {
        Self::new(resolution, resolution, resolution)
    }

    pub fn layer_size(&self) -> (usize, usize) {
        (self.layer_width, self.layer_height)
    }

    pub fn heightmap_resolution(&self) -> usize {
        self.heightmap_resolution
    }

    pub fn normalize(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(
            x as f32 / (self.layer_width - 1) as f32,
            y as f32 / (self.layer_height - 1) as f32,
        )
    }

    /// Nearest heightmap sample for a layer cell, clamped into the heightmap
    pub fn to_heightmap(&self, x: usize, y: usize) -> (usize, usize) {
        let last = self.heightmap_resolution - 1;
        (
            ((x as f32 * self.ratio_x) as usize).min(last),
            ((y as f32 * self.ratio_y) as usize).min(last),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let map = CoordinateMap::identity(33).unwrap();
        for (x, y) in [(0, 0), (5, 17), (32, 32)] {
            assert_eq!(map.to_heightmap(x, y), (x, y));
        }
        assert_eq!(map.normalize(32, 16), Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_downsampled_layer() {
        // 513 heightmap samples under a 256 wide layer: ratio 2.00390625
        let map = CoordinateMap::new(513, 256, 256).unwrap();
        assert_eq!(map.to_heightmap(0, 0), (0, 0));
        assert_eq!(map.to_heightmap(1, 2), (2, 4));
        assert_eq!(map.to_heightmap(255, 255), (511, 511));
    }

    #[test]
    fn test_upsampled_layer() {
        let map = CoordinateMap::new(5, 10, 20).unwrap();
        assert_eq!(map.to_heightmap(3, 3), (1, 0));
        assert_eq!(map.to_heightmap(9, 19), (4, 4));
        assert_eq!(map.normalize(9, 19), Vec2::ONE);
    }

    #[test]
    fn test_rejects_unnormalizable_sizes() {
        assert!(CoordinateMap::new(1, 8, 8).is_err());
        assert!(CoordinateMap::new(8, 1, 8).is_err());
        assert!(CoordinateMap::new(8, 8, 0).is_err());
    }
}
