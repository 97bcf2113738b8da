use crate::city::{CityCell, CityGrid};
use crate::cube::{build_cube, CubeMesh};
use crate::error::{require_extent, GenerationError, Result};
use crate::random::roll_percentage;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters for box-shaped procedural buildings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingRecipe {
    pub min_height: f32,
    /// Exclusive upper bound of the height roll
    pub max_height: f32,
    pub width: f32,
    /// Chance, in percent, that a candidate site gets a building at all
    pub spawn_percentage: u32,
    pub color: [f32; 4],
}

impl Default for BuildingRecipe {
    fn default() -> Self {
        Self::city_block()
    }
}

impl BuildingRecipe {
    pub fn city_block() -> Self {
        BuildingRecipe {
            min_height: 4.0,
            max_height: 12.0,
            width: 8.0,
            spawn_percentage: 80,
            color: [0.75, 0.75, 0.78, 1.0],
        }
    }

    pub fn tower() -> Self {
        BuildingRecipe {
            min_height: 20.0,
            max_height: 45.0,
            width: 6.0,
            spawn_percentage: 35,
            color: [0.45, 0.5, 0.6, 1.0],
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_extent("min_height", self.min_height)?;
        require_extent("max_height", self.max_height)?;
        require_extent("width", self.width)?;
        if self.min_height > self.max_height {
            return Err(GenerationError::invalid(
                "min_height",
                format!("{} exceeds max_height {}", self.min_height, self.max_height),
            ));
        }
        if self.spawn_percentage > 100 {
            return Err(GenerationError::invalid(
                "spawn_percentage",
                format!("must be at most 100, got {}", self.spawn_percentage),
            ));
        }
        Ok(())
    }

    /// Height in `[min_height, max_height)`, or `min_height` for an empty range
    pub fn roll_height<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max_height > self.min_height {
            rng.gen_range(self.min_height..self.max_height)
        } else {
            self.min_height
        }
    }
}

/// Roll for a building and, on success, build its mesh.
///
/// Draws one spawn roll and, when it succeeds, one height roll.
pub fn generate_building<R: Rng + ?Sized>(
    recipe: &BuildingRecipe,
    rng: &mut R,
) -> Result<Option<CubeMesh>> {
    recipe.validate()?;

    if !roll_percentage(rng, recipe.spawn_percentage) {
        return Ok(None);
    }

    let mut mesh = build_cube(recipe.roll_height(rng), recipe.width)?;
    mesh.optimize();
    Ok(Some(mesh))
}

/// Building standing on one city plot
#[derive(Debug, Clone, PartialEq)]
pub struct CityBuilding {
    pub cell: (usize, usize),
    /// Centre of the plot's footprint, on the ground plane
    pub position: Vec3,
    pub color: [f32; 4],
    pub mesh: CubeMesh,
}

/// Raise buildings on the `Building` plots of a city layout.
///
/// Each plot gets its own spawn roll, so some plots may stay empty. Plots
/// are `cell_size` wide and laid out from the origin along +X (columns) and
/// +Z (rows).
pub fn populate_city<R: Rng + ?Sized>(
    city: &CityGrid,
    recipe: &BuildingRecipe,
    cell_size: f32,
    rng: &mut R,
) -> Result<Vec<CityBuilding>> {
    recipe.validate()?;
    require_extent("cell_size", cell_size)?;

    let mut buildings = Vec::new();
    for (x, y, &cell) in city.grid().iter() {
        if cell != CityCell::Building {
            continue;
        }

        if let Some(mesh) = generate_building(recipe, rng)? {
            buildings.push(CityBuilding {
                cell: (x, y),
                position: Vec3::new((x as f32 + 0.5) * cell_size, 0.0, (y as f32 + 0.5) * cell_size),
                color: recipe.color,
                mesh,
            });
        }
    }

    log::debug!(
        "Raised {} of {} building plots",
        buildings.len(),
        city.count(CityCell::Building)
    );
    Ok(buildings)
}
