use glam::Vec3;
use verdant_terrain::{HeightField, HeightmapGenerator, NoiseField, SurfaceThresholds, TerrainDimensions};

fn main() {
    let seed = 137u8;
    let field = NoiseField::new();

    println!("Seed: {}", seed);
    for (x, y) in [(0.0, 0.0), (0.5, 0.5), (1.25, 3.75)] {
        println!("Noise at ({}, {}): {:.4}", x, y, field.sample(x, y, seed));
    }
    println!();

    let dimensions = TerrainDimensions::new(9, Vec3::new(100.0, 40.0, 100.0));
    let terrain = match HeightmapGenerator::new().generate_terrain(dimensions, 4.0, seed) {
        Ok(terrain) => terrain,
        Err(e) => {
            eprintln!("Failed to generate terrain: {}", e);
            return;
        }
    };

    let thresholds = SurfaceThresholds::new(12.0, 3.0, 30.0);
    println!("9x9 heightmap (height / band):");
    for y in 0..terrain.resolution() {
        let row: Vec<String> = (0..terrain.resolution())
            .map(|x| {
                let height = terrain.height(x, y);
                format!("{:5.1} {:<8}", height, format!("{:?}", thresholds.band(height)))
            })
            .collect();
        println!("  {}", row.join(" "));
    }
}
