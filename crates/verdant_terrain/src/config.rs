use crate::noise_field::FractalSettings;
use crate::placement::{BuildingPlacement, TreePlacement};
use crate::surface::SurfaceThresholds;
use crate::terrain::TerrainDimensions;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use verdant_procgen::{require_raster_size, GenerationError, Result};

/// Toggle plus tuning value for one derived layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    pub generate: bool,
    /// Layer specific: the slope limit, in degrees, for trees; unused by
    /// the grass and path layers
    pub threshold: f32,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            generate: true,
            threshold: 0.0,
        }
    }
}

/// Everything a terrain generation run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub heightmap_resolution: usize,
    /// Side length of the grass detail layer
    pub detail_resolution: usize,
    /// Side length of the splat (path) layer
    pub alphamap_resolution: usize,
    /// Physical size: footprint in X/Z, height of a full-scale sample in Y
    pub size: [f32; 3],
    pub terrain_scale: f32,
    pub fractal: FractalSettings,
    /// Fixed seed; drawn at random when absent
    pub seed: Option<u8>,
    pub water_height: f32,
    pub beach_size: f32,
    pub mountain_height: f32,
    pub tree_spacing: usize,
    pub grass: LayerSettings,
    pub path: LayerSettings,
    pub trees: LayerSettings,
    pub buildings: Option<BuildingPlacement>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            heightmap_resolution: 129,
            detail_resolution: 128,
            alphamap_resolution: 128,
            size: [500.0, 60.0, 500.0],
            terrain_scale: 5.0,
            fractal: FractalSettings::default(),
            seed: None,
            water_height: 15.0,
            beach_size: 3.0,
            mountain_height: 45.0,
            tree_spacing: 8,
            grass: LayerSettings::default(),
            path: LayerSettings::default(),
            trees: LayerSettings {
                generate: true,
                threshold: 30.0,
            },
            buildings: None,
        }
    }
}

impl TerrainConfig {
    pub fn dimensions(&self) -> TerrainDimensions {
        TerrainDimensions::new(self.heightmap_resolution, Vec3::from_array(self.size))
    }

    pub fn thresholds(&self) -> SurfaceThresholds {
        SurfaceThresholds::new(self.water_height, self.beach_size, self.mountain_height)
    }

    pub fn tree_placement(&self) -> TreePlacement {
        TreePlacement {
            spacing: self.tree_spacing,
            slope_threshold: self.trees.threshold,
        }
    }

    /// Reject configurations a run would fail on, before anything is
    /// generated. Threshold ordering is not checked.
    pub fn validate(&self) -> Result<()> {
        self.dimensions().validate()?;
        if !self.terrain_scale.is_finite() {
            return Err(GenerationError::invalid(
                "terrain_scale",
                format!("must be finite, got {}", self.terrain_scale),
            ));
        }
        self.fractal.validate()?;
        if self.grass.generate {
            require_raster_size("detail_resolution", self.detail_resolution)?;
        }
        if self.path.generate {
            require_raster_size("alphamap_resolution", self.alphamap_resolution)?;
        }
        if self.trees.generate && self.tree_spacing == 0 {
            return Err(GenerationError::invalid("tree_spacing", "must be at least 1"));
        }
        if let Some(buildings) = &self.buildings {
            if buildings.spacing == 0 {
                return Err(GenerationError::invalid("spacing", "must be at least 1"));
            }
            buildings.recipe.validate()?;
        }
        Ok(())
    }
}
