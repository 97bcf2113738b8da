pub mod noise_field;
pub mod seed;
pub mod coords;
pub mod terrain;
pub mod heightmap;
pub mod surface;
pub mod detail;
pub mod placement;
pub mod config;
pub mod pipeline;

// Re-export commonly used items
pub use noise_field::{FractalSettings, NoiseField};
pub use seed::{StreamLayer, TerrainSeed};
pub use coords::CoordinateMap;
pub use terrain::{HeightField, Terrain, TerrainDimensions};
pub use heightmap::{Heightmap, HeightmapGenerator};
pub use surface::{classify, classify_layer, Band, SurfaceSample, SurfaceThresholds};
pub use detail::{grass_layer, splat_layer, DetailGrid, SplatGrid, SplatWeights};
pub use placement::{place_buildings, place_trees, BuildingPlacement, PlacedBuilding, PlacedObject, TreePlacement};
pub use config::{LayerSettings, TerrainConfig};
pub use pipeline::{GeneratedTerrain, TerrainGenerator};
