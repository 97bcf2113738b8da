mod config;
mod report;

use clap::Parser;
use config::DemoConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use verdant_procgen::{generate_city, populate_city};
use verdant_terrain::TerrainGenerator;

/// Generate a terrain and a city layout and report on them
#[derive(Debug, Parser)]
#[command(name = "verdant", version)]
struct Cli {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the seed of the run's random stream
    #[arg(long)]
    seed: Option<u64>,

    /// Override the terrain seed (0-254)
    #[arg(long)]
    terrain_seed: Option<u8>,

    /// Print the city layout to stdout
    #[arg(long)]
    print_city: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("Generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.rng_seed = seed;
    }
    if let Some(seed) = cli.terrain_seed {
        config.terrain.seed = Some(seed);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);

    let generator = TerrainGenerator::new(config.terrain.clone())?;
    let world = generator.generate(&mut rng)?;
    report::log_terrain(&world);

    let city_config = &config.city;
    let city = generate_city(city_config.width, city_config.height, city_config.building_budget, &mut rng);
    let buildings = populate_city(&city, &city_config.recipe, city_config.cell_size, &mut rng)?;
    report::log_city(&city, &buildings);

    if cli.print_city {
        for (y, row) in city.rows().iter().enumerate() {
            println!("{y}: {row}");
        }
    }

    Ok(())
}
