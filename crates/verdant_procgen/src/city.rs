use crate::grid::Grid;
use crate::random::{roll_percentage, seeded_rng};
use rand::Rng;

/// Chance, in percent, that a plot holding budget receives a building
pub const BUILDING_CHANCE: u32 = 50;

/// One plot of the city layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CityCell {
    #[default]
    Grass = 0,
    Street = 1,
    Building = 2,
}

impl CityCell {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Street grid with building infill
#[derive(Debug, Clone, PartialEq)]
pub struct CityGrid {
    cells: Grid<CityCell>,
}

impl CityGrid {
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CityCell> {
        self.cells.get(x, y).copied()
    }

    pub fn grid(&self) -> &Grid<CityCell> {
        &self.cells
    }

    pub fn count(&self, kind: CityCell) -> usize {
        self.cells.cells().iter().filter(|&&cell| cell == kind).count()
    }

    /// Top-down text view, one line per row, cells as their numeric codes
    pub fn rows(&self) -> Vec<String> {
        (0..self.height())
            .filter_map(|y| self.cells.row(y))
            .map(|row| {
                row.iter()
                    .map(|cell| cell.code().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect()
    }
}

/// Lay out a `width x height` city.
///
/// Rules per cell, first match wins:
/// 1. even row: street
/// 2. odd column: street
/// 3. budget left: spend one unit, then a [`BUILDING_CHANCE`] roll decides
///    between building and grass
/// 4. grass
///
/// Budget is spent on every plot that reaches rule 3, even when the roll
/// fails, so `building_budget` caps the number of rolls rather than the
/// number of buildings. Cells are scanned row by row.
pub fn generate_city<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    building_budget: u32,
    rng: &mut R,
) -> CityGrid {
    let mut buildings_left = building_budget;

    let cells = Grid::from_fn(width, height, |x, y| {
        if y % 2 == 0 || x % 2 == 1 {
            CityCell::Street
        } else if buildings_left > 0 {
            buildings_left -= 1;
            if roll_percentage(rng, BUILDING_CHANCE) {
                CityCell::Building
            } else {
                CityCell::Grass
            }
        } else {
            CityCell::Grass
        }
    });

    let city = CityGrid { cells };
    log::debug!(
        "Generated {}x{} city: {} buildings, {} budget unspent",
        width,
        height,
        city.count(CityCell::Building),
        buildings_left
    );
    city
}

/// [`generate_city`] on a fresh ChaCha stream seeded with `seed`
pub fn generate_city_seeded(width: usize, height: usize, building_budget: u32, seed: u64) -> CityGrid {
    generate_city(width, height, building_budget, &mut seeded_rng(seed))
}
