use verdant_procgen::{CityBuilding, CityCell, CityGrid};
use verdant_terrain::{Band, GeneratedTerrain, HeightField, SplatWeights};

/// Share of heightmap samples per band, lowest band first
pub fn band_histogram(world: &GeneratedTerrain) -> [usize; 4] {
    let terrain = &world.terrain;
    let resolution = terrain.resolution();
    let mut counts = [0; 4];

    for y in 0..resolution {
        for x in 0..resolution {
            let band = world.thresholds.band(terrain.height(x, y));
            counts[band as usize] += 1;
        }
    }
    counts
}

/// Mean of every splat channel
pub fn mean_splat(cells: &[SplatWeights]) -> [f32; 3] {
    if cells.is_empty() {
        return [0.0; 3];
    }
    let mut sum = [0.0f32; 3];
    for cell in cells {
        for (total, weight) in sum.iter_mut().zip(cell.0) {
            *total += weight;
        }
    }
    sum.map(|total| total / cells.len() as f32)
}

pub fn log_terrain(world: &GeneratedTerrain) {
    let resolution = world.terrain.resolution();
    log::info!("[TERRAIN] Seed: {}", world.seed.value);
    log::info!("[TERRAIN] Heightmap: {}x{}", resolution, resolution);

    let histogram = band_histogram(world);
    let total = (resolution * resolution) as f32;
    for (band, count) in [Band::Water, Band::Beach, Band::Ground, Band::Mountain].iter().zip(histogram) {
        log::info!("[TERRAIN]   {:?}: {:.1}%", band, count as f32 * 100.0 / total);
    }

    if let Some(grass) = &world.grass {
        let covered = grass.cells().iter().filter(|&&d| d == 1).count();
        log::info!(
            "[LAYERS] Grass: {}x{}, {:.1}% covered",
            grass.width(),
            grass.height(),
            covered as f32 * 100.0 / grass.len() as f32
        );
    }

    if let Some(splat) = &world.splat {
        let [grass, rock, sand] = mean_splat(splat.cells());
        log::info!(
            "[LAYERS] Splat: {}x{}, mean grass {:.2} rock {:.2} sand {:.2}",
            splat.width(),
            splat.height(),
            grass,
            rock,
            sand
        );
    }

    log::info!("[PLACEMENT] Trees: {}", world.trees.len());
    log::info!("[PLACEMENT] Buildings: {}", world.buildings.len());
    log::info!("[WATER] Plane at {:?}", world.water_plane_position());
}

pub fn log_city(city: &CityGrid, buildings: &[CityBuilding]) {
    log::info!(
        "[CITY] {}x{}: {} street, {} grass, {} building plots, {} raised",
        city.width(),
        city.height(),
        city.count(CityCell::Street),
        city.count(CityCell::Grass),
        city.count(CityCell::Building),
        buildings.len()
    );
    for (y, row) in city.rows().iter().enumerate() {
        log::debug!("[CITY] {y}: {row}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_terrain::{TerrainConfig, TerrainGenerator, TerrainSeed};

    #[test]
    fn test_histogram_counts_every_sample() {
        let config = TerrainConfig {
            heightmap_resolution: 33,
            ..Default::default()
        };
        let world = TerrainGenerator::new(config)
            .unwrap()
            .generate_with_seed(TerrainSeed::new(3))
            .unwrap();

        let histogram = band_histogram(&world);
        assert_eq!(histogram.iter().sum::<usize>(), 33 * 33);
    }

    #[test]
    fn test_mean_splat() {
        let cells = [SplatWeights([1.0, 0.0, 1.0]), SplatWeights([0.0, 1.0, 0.0])];
        assert_eq!(mean_splat(&cells), [0.5, 0.5, 0.5]);
        assert_eq!(mean_splat(&[]), [0.0; 3]);
    }
}
