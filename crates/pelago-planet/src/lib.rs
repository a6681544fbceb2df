//! Whole-planet generation pipeline.
//!
//! Drives the stages end to end: sample the elevation field over six
//! cube faces, contour each face's ocean region, weld the seams, and
//! only then publish the results. A registry keeps generated planets
//! addressable by name.

mod error;
mod planet;
mod registry;

pub use error::{GenerateError, RegistryError};
pub use planet::{GenerateReport, Planet};
pub use registry::PlanetRegistry;
