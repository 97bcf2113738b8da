use serde::{Deserialize, Serialize};
use std::path::Path;
use verdant_procgen::BuildingRecipe;
use verdant_terrain::TerrainConfig;

/// Errors that can occur when loading the demo configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse JSON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] serde_json::Error),
}

/// City layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    pub width: usize,
    pub height: usize,
    pub building_budget: u32,
    /// World size of one plot
    pub cell_size: f32,
    pub recipe: BuildingRecipe,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 15,
            building_budget: 50,
            cell_size: 10.0,
            recipe: BuildingRecipe::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub terrain: TerrainConfig,
    pub city: CityConfig,
    /// Seed of the random stream driving the whole run
    pub rng_seed: u64,
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::ParseError)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_json(&text)?;
        log::info!("[CONFIG] Loaded {}", path.display());
        Ok(config)
    }
}
