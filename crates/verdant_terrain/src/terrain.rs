use crate::heightmap::Heightmap;
use glam::Vec3;
use verdant_procgen::{require_raster_size, GenerationError, Result};

/// Height-field service the derived-layer generators read from.
///
/// Heights are in world units. Steepness is in degrees and describes the
/// continuous surface, not individual samples.
pub trait HeightField {
    /// Samples per side of the square heightmap
    fn resolution(&self) -> usize;

    /// Physical extent: footprint in X/Z, vertical scale in Y
    fn size(&self) -> Vec3;

    /// World-space height of heightmap sample `(x, y)`
    fn height(&self, x: usize, y: usize) -> f32;

    /// Slope, in degrees, at normalized coordinate `(nx, ny)`
    fn steepness(&self, nx: f32, ny: f32) -> f32;
}

/// Resolution and physical size of a terrain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainDimensions {
    pub heightmap_resolution: usize,
    pub size: [f32; 3],
}

impl TerrainDimensions {
    pub fn new(heightmap_resolution: usize, size: Vec3) -> Self {
        Self {
            heightmap_resolution,
            size: size.to_array(),
        }
    }

    pub fn size(&self) -> Vec3 {
        Vec3::from_array(self.size)
    }

    pub fn validate(&self) -> Result<()> {
        require_raster_size("heightmap_resolution", self.heightmap_resolution)?;

        let [x, y, z] = self.size;
        // Heightmap coordinates divide by the truncated footprint
        if !(x.is_finite() && x >= 1.0) || !(z.is_finite() && z >= 1.0) {
            return Err(GenerationError::invalid(
                "size",
                format!("footprint must be at least 1x1, got {x}x{z}"),
            ));
        }
        if !y.is_finite() || y < 0.0 {
            return Err(GenerationError::invalid(
                "size",
                format!("vertical extent must be finite and non-negative, got {y}"),
            ));
        }
        Ok(())
    }
}

/// Heightmap plus the physical dimensions it is stretched over
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    dimensions: TerrainDimensions,
    heights: Heightmap,
}

impl Terrain {
    pub fn new(dimensions: TerrainDimensions, heights: Heightmap) -> Result<Self> {
        dimensions.validate()?;
        check_size(&dimensions, &heights)?;
        Ok(Self { dimensions, heights })
    }

    pub fn dimensions(&self) -> &TerrainDimensions {
        &self.dimensions
    }

    /// Raw samples in `[0, 1]`
    pub fn heights(&self) -> &Heightmap {
        &self.heights
    }

    /// Replace every sample at once. The new heightmap must have the same
    /// resolution; on mismatch nothing changes.
    pub fn set_heights(&mut self, heights: Heightmap) -> Result<()> {
        check_size(&self.dimensions, &heights)?;
        self.heights = heights;
        Ok(())
    }

    /// Bilinearly interpolated world height at a normalized coordinate
    pub fn interpolated_height(&self, nx: f32, ny: f32) -> f32 {
        let last = self.resolution() - 1;
        let fx = nx.clamp(0.0, 1.0) * last as f32;
        let fy = ny.clamp(0.0, 1.0) * last as f32;

        let x0 = (fx.floor() as usize).min(last - 1);
        let y0 = (fy.floor() as usize).min(last - 1);
        let tx = fx - x0 as f32;
        let ty = fy - y0 as f32;

        let h = &self.heights;
        let top = lerp(h[(x0, y0)], h[(x0 + 1, y0)], tx);
        let bottom = lerp(h[(x0, y0 + 1)], h[(x0 + 1, y0 + 1)], tx);

        lerp(top, bottom, ty) * self.dimensions.size[1]
    }
}

impl HeightField for Terrain {
    fn resolution(&self) -> usize {
        self.dimensions.heightmap_resolution
    }

    fn size(&self) -> Vec3 {
        self.dimensions.size()
    }

    /// Out-of-range coordinates clamp to the nearest edge sample
    fn height(&self, x: usize, y: usize) -> f32 {
        let last = self.resolution() - 1;
        self.heights[(x.min(last), y.min(last))] * self.dimensions.size[1]
    }

    /// Central difference over one sample spacing on the interpolated
    /// surface, one-sided at the borders
    fn steepness(&self, nx: f32, ny: f32) -> f32 {
        let nx = nx.clamp(0.0, 1.0);
        let ny = ny.clamp(0.0, 1.0);
        let step = 1.0 / (self.resolution() - 1) as f32;
        let size = self.size();

        let (x0, x1) = ((nx - step).max(0.0), (nx + step).min(1.0));
        let (y0, y1) = ((ny - step).max(0.0), (ny + step).min(1.0));

        let run_x = (x1 - x0) * size.x;
        let run_z = (y1 - y0) * size.z;

        let slope_x = if run_x > 0.0 {
            (self.interpolated_height(x1, ny) - self.interpolated_height(x0, ny)) / run_x
        } else {
            0.0
        };
        let slope_z = if run_z > 0.0 {
            (self.interpolated_height(nx, y1) - self.interpolated_height(nx, y0)) / run_z
        } else {
            0.0
        };

        slope_x.hypot(slope_z).atan().to_degrees()
    }
}

fn check_size(dimensions: &TerrainDimensions, heights: &Heightmap) -> Result<()> {
    let expected = (dimensions.heightmap_resolution, dimensions.heightmap_resolution);
    if heights.dimensions() != expected {
        return Err(GenerationError::SizeMismatch {
            expected,
            actual: heights.dimensions(),
        });
    }
    Ok(())
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
