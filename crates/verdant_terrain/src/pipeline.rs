use crate::config::TerrainConfig;
use crate::detail::{grass_layer, splat_layer, DetailGrid, SplatGrid};
use crate::heightmap::HeightmapGenerator;
use crate::placement::{place_buildings, place_trees, PlacedBuilding, PlacedObject};
use crate::seed::{StreamLayer, TerrainSeed};
use crate::surface::SurfaceThresholds;
use crate::terrain::{HeightField, Terrain};
use glam::Vec3;
use rand::Rng;
use verdant_procgen::Result;

/// Output of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTerrain {
    pub seed: TerrainSeed,
    pub terrain: Terrain,
    pub thresholds: SurfaceThresholds,
    pub grass: Option<DetailGrid>,
    pub splat: Option<SplatGrid>,
    pub trees: Vec<PlacedObject>,
    pub buildings: Vec<PlacedBuilding>,
}

impl GeneratedTerrain {
    pub fn water_height(&self) -> f32 {
        self.thresholds.water_height
    }

    /// Where a water surface covering the whole terrain should sit
    pub fn water_plane_position(&self) -> Vec3 {
        let size = self.terrain.size();
        Vec3::new(size.x * 0.5, self.water_height(), size.z * 0.5)
    }
}

/// Runs heightmap, layer and placement generation from one config
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    heightmaps: HeightmapGenerator,
}

impl TerrainGenerator {
    pub fn new(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        let heightmaps = HeightmapGenerator::with_fractal(config.fractal);
        Ok(Self { config, heightmaps })
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn water_height(&self) -> f32 {
        self.config.water_height
    }

    /// Generate with the configured seed, or one drawn from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedTerrain> {
        let seed = match self.config.seed {
            Some(value) => TerrainSeed::new(value),
            None => TerrainSeed::random(rng),
        };
        self.generate_with_seed(seed)
    }

    /// Generate everything the config enables. The result depends only on
    /// the config and `seed`.
    pub fn generate_with_seed(&self, seed: TerrainSeed) -> Result<GeneratedTerrain> {
        let config = &self.config;
        let thresholds = config.thresholds();

        log::info!(
            "[GENERATOR] Generating {}x{} terrain with seed {}",
            config.heightmap_resolution,
            config.heightmap_resolution,
            seed.value
        );
        let terrain = self
            .heightmaps
            .generate_terrain(config.dimensions(), config.terrain_scale, seed.value)?;

        let grass = if config.grass.generate {
            let size = config.detail_resolution;
            Some(grass_layer(&terrain, size, size, &thresholds)?)
        } else {
            None
        };

        let splat = if config.path.generate {
            let size = config.alphamap_resolution;
            Some(splat_layer(&terrain, size, size, &thresholds)?)
        } else {
            None
        };

        let trees = if config.trees.generate {
            let mut rng = seed.stream(StreamLayer::Trees);
            place_trees(&terrain, &config.tree_placement(), &thresholds, &mut rng)?
        } else {
            Vec::new()
        };

        let buildings = match &config.buildings {
            Some(placement) => {
                let mut rng = seed.stream(StreamLayer::Buildings);
                place_buildings(&terrain, placement, &thresholds, &mut rng)?
            }
            None => Vec::new(),
        };

        log::info!(
            "[GENERATOR] Terrain ready: {} trees, {} buildings",
            trees.len(),
            buildings.len()
        );

        Ok(GeneratedTerrain {
            seed,
            terrain,
            thresholds,
            grass,
            splat,
            trees,
            buildings,
        })
    }
}
