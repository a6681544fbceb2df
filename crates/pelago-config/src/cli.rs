//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::GeneratorConfig;

/// Planet generator command-line arguments.
///
/// CLI values override settings loaded from the RON config file.
#[derive(Parser, Debug)]
#[command(name = "pelago", about = "Cube-sphere planet and ocean mesh generator")]
pub struct CliArgs {
    /// Vertices per cube-face side (2..=256).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Ocean level threshold (0.0..=1.0).
    #[arg(long)]
    pub ocean_level: Option<f64>,

    /// Planet radius in world units.
    #[arg(long)]
    pub radius: Option<f64>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config file (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(ocean_level) = args.ocean_level {
            self.planet.ocean_level = ocean_level;
        }
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            resolution: None,
            ocean_level: None,
            radius: None,
            seed: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_no_overrides_leaves_config_untouched() {
        let mut config = GeneratorConfig::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = GeneratorConfig::default();
        let args = CliArgs {
            resolution: Some(32),
            ocean_level: Some(0.35),
            radius: Some(2.5),
            seed: Some(99),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.planet.resolution, 32);
        assert_eq!(config.planet.ocean_level, 0.35);
        assert_eq!(config.planet.radius, 2.5);
        assert_eq!(config.seed, 99);
    }
}
