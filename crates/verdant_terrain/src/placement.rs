use crate::coords::CoordinateMap;
use crate::surface::{classify, SurfaceSample, SurfaceThresholds};
use crate::terrain::HeightField;
use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use verdant_procgen::{generate_building, require_raster_size, BuildingRecipe, CubeMesh, GenerationError, Result};

/// Untinted instance color
pub const NEUTRAL_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One object instance handed to the instancing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    /// Normalized `(x, z)` on the terrain footprint
    pub position: Vec2,
    pub rotation_degrees: f32,
    pub color: [f32; 4],
    pub height_scale: f32,
    pub width_scale: f32,
}

impl PlacedObject {
    pub fn new(position: Vec2, rotation_degrees: f32) -> Self {
        Self {
            position,
            rotation_degrees,
            color: NEUTRAL_TINT,
            height_scale: 1.0,
            width_scale: 1.0,
        }
    }

    /// World position on a terrain of the given footprint, at `height`
    pub fn world_position(&self, size: Vec3, height: f32) -> Vec3 {
        Vec3::new(self.position.x * size.x, height, self.position.y * size.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreePlacement {
    /// Heightmap samples between candidate sites, per axis
    pub spacing: usize,
    /// Sites at or above this slope (degrees) stay bare
    pub slope_threshold: f32,
}

impl Default for TreePlacement {
    fn default() -> Self {
        Self {
            spacing: 8,
            slope_threshold: 30.0,
        }
    }
}

/// Box buildings scattered over flat, vegetated ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingPlacement {
    pub spacing: usize,
    pub slope_threshold: f32,
    pub recipe: BuildingRecipe,
}

impl Default for BuildingPlacement {
    fn default() -> Self {
        Self {
            spacing: 32,
            slope_threshold: 8.0,
            recipe: BuildingRecipe::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBuilding {
    pub object: PlacedObject,
    /// World height of the ground under the footprint centre
    pub base_height: f32,
    pub mesh: CubeMesh,
}

/// Candidate sites every `spacing` samples along both axes, row by row
fn candidate_sites(resolution: usize, spacing: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..resolution)
        .step_by(spacing)
        .flat_map(move |y| (0..resolution).step_by(spacing).map(move |x| (x, y)))
}

fn require_spacing(spacing: usize) -> Result<()> {
    if spacing == 0 {
        return Err(GenerationError::invalid("spacing", "must be at least 1"));
    }
    Ok(())
}

fn accepts(sample: &SurfaceSample, slope_threshold: f32, thresholds: &SurfaceThresholds) -> bool {
    sample.steepness_degrees < slope_threshold && thresholds.is_vegetated(sample.height)
}

/// Scatter trees over the heightmap.
///
/// Scans every `spacing`-th sample along both axes. A site gets a tree when
/// its slope is below `slope_threshold` and its height lies strictly between
/// the shoreline and the mountain line. Each tree draws one rotation from
/// `[0, 360)`; rejected sites draw nothing.
pub fn place_trees<F, R>(
    field: &F,
    placement: &TreePlacement,
    thresholds: &SurfaceThresholds,
    rng: &mut R,
) -> Result<Vec<PlacedObject>>
where
    F: HeightField + ?Sized,
    R: Rng + ?Sized,
{
    require_spacing(placement.spacing)?;
    require_raster_size("resolution", field.resolution())?;
    let map = CoordinateMap::identity(field.resolution())?;

    let mut trees = Vec::new();
    for (x, y) in candidate_sites(field.resolution(), placement.spacing) {
        let sample = classify(field, &map, x, y, thresholds);
        if accepts(&sample, placement.slope_threshold, thresholds) {
            trees.push(PlacedObject::new(map.normalize(x, y), rng.gen_range(0.0..360.0)));
        }
    }

    log::debug!("Placed {} trees (spacing {})", trees.len(), placement.spacing);
    Ok(trees)
}

/// Scatter box buildings over the heightmap.
///
/// Sites are gated like trees, usually with a tighter slope limit, then the
/// recipe's spawn roll decides whether a building goes up. A building draws
/// its spawn roll, its height and then its rotation.
pub fn place_buildings<F, R>(
    field: &F,
    placement: &BuildingPlacement,
    thresholds: &SurfaceThresholds,
    rng: &mut R,
) -> Result<Vec<PlacedBuilding>>
where
    F: HeightField + ?Sized,
    R: Rng + ?Sized,
{
    require_spacing(placement.spacing)?;
    placement.recipe.validate()?;
    require_raster_size("resolution", field.resolution())?;
    let map = CoordinateMap::identity(field.resolution())?;

    let mut buildings = Vec::new();
    for (x, y) in candidate_sites(field.resolution(), placement.spacing) {
        let sample = classify(field, &map, x, y, thresholds);
        if !accepts(&sample, placement.slope_threshold, thresholds) {
            continue;
        }

        if let Some(mesh) = generate_building(&placement.recipe, rng)? {
            let mut object = PlacedObject::new(map.normalize(x, y), rng.gen_range(0.0..360.0));
            object.color = placement.recipe.color;
            buildings.push(PlacedBuilding {
                object,
                base_height: sample.height,
                mesh,
            });
        }
    }

    log::debug!("Placed {} buildings (spacing {})", buildings.len(), placement.spacing);
    Ok(buildings)
}
