//! Pipeline and registry errors.

use pelago_ocean::OceanError;
use thiserror::Error;

/// A generation pass failed. The planet keeps whatever meshes the
/// previous successful pass produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Ocean contouring or welding failed.
    #[error("ocean meshing failed: {0}")]
    Ocean(#[from] OceanError),
}

/// Registry bookkeeping failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A planet with this name is already registered.
    #[error("planet {name:?} is already registered")]
    DuplicateName {
        /// The rejected name.
        name: String,
    },
}
