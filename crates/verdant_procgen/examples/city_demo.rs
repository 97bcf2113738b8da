use verdant_procgen::{build_cube, generate_city_seeded, populate_city, seeded_rng, BuildingRecipe, CityCell};

fn main() {
    println!("=== Procedural City Generation Demo ===\n");

    let (width, height, budget, seed) = (15, 11, 20, 42);
    let city = generate_city_seeded(width, height, budget, seed);

    println!("Layout ({}x{}, budget {}, seed {}):", width, height, budget, seed);
    for (y, row) in city.rows().iter().enumerate() {
        println!("  {:>2}: {}", y, row);
    }
    println!();

    println!("Cells:");
    println!("  Street: {}", city.count(CityCell::Street));
    println!("  Grass: {}", city.count(CityCell::Grass));
    println!("  Building: {}", city.count(CityCell::Building));
    println!();

    let recipe = BuildingRecipe::city_block();
    let buildings = match populate_city(&city, &recipe, 10.0, &mut seeded_rng(seed)) {
        Ok(buildings) => buildings,
        Err(e) => {
            eprintln!("Failed to raise buildings: {}", e);
            return;
        }
    };

    println!("Raised {} buildings:", buildings.len());
    for building in &buildings {
        println!(
            "  plot {:?} at {:?}: {:.1} tall, {} vertices, {} triangles",
            building.cell,
            building.position,
            building.mesh.height,
            building.mesh.vertex_count(),
            building.mesh.triangle_count()
        );
    }
    println!();

    if let Ok(cube) = build_cube(20.0, 10.0) {
        println!("Reference cube (height 20, width 10):");
        for (i, (position, normal)) in cube.positions().zip(cube.normals()).enumerate() {
            println!("  v{}: {:?} n {:?}", i, position, normal);
        }
    }
}
