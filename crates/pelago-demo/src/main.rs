//! Demo binary that generates a planet and reports mesh statistics.
//!
//! Configuration is loaded from `pelago.ron` (created with defaults on
//! first run) and can be overridden via CLI flags.
//! Run with `cargo run -p pelago-demo` for the default planet.
//! Run with `cargo run -p pelago-demo -- --resolution 128 --seed 7` to
//! override the grid density and world seed.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pelago_config::{CliArgs, GeneratorConfig};
use pelago_log::init_logging;
use pelago_planet::Planet;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "pelago.ron";

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), String> {
    let config_path = args
        .config
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let mut config =
        GeneratorConfig::load_or_create(config_path).map_err(|e| e.to_string())?;
    config.apply_cli_overrides(args);
    config.validate().map_err(|e| e.to_string())?;
    info!(
        path = %config_path.display(),
        seed = config.seed,
        resolution = config.planet.resolution,
        ocean_level = config.planet.ocean_level,
        radius = config.planet.radius,
        layers = config.noise_layers.len(),
        "configuration loaded"
    );

    let mut planet = Planet::new(config).map_err(|e| e.to_string())?;
    let report = planet.generate().map_err(|e| e.to_string())?;

    info!(
        vertices = report.terrain_vertices,
        triangles = report.terrain_triangles,
        "terrain meshes built"
    );
    info!(
        vertices = report.ocean_vertices,
        triangles = report.ocean_triangles,
        "ocean mesh welded"
    );
    if let Some((lo, hi)) = planet.elevation_range() {
        info!(min = lo, max = hi, "elevation range relative to ocean level");
    }
    match report.ocean_bounds {
        Some(bounds) => info!(min = ?bounds.min, max = ?bounds.max, "ocean bounds"),
        None => info!("planet has no ocean at this ocean level"),
    }
    Ok(())
}
