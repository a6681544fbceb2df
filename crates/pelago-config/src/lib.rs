//! Configuration for the planet generator.
//!
//! Settings persist to disk as RON files, can be overridden from the
//! command line via clap, and are validated before the generation
//! pipeline runs, so invalid configuration is rejected at configuration
//! time, never mid-pipeline.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{GeneratorConfig, NoiseLayerKind, NoiseLayerSettings, PlanetSettings};
pub use error::{ConfigError, ValidationError};
