//! Layered noise elevation field over the unit sphere.
//!
//! The field is the scalar function driving both the terrain surface
//! and the ocean shoreline: the contour mesher treats `elevation == 0`
//! as the shoreline isosurface, so the configured ocean level is
//! subtracted before the value leaves this crate.

mod field;
mod filters;
mod min_max;

pub use field::ElevationField;
pub use filters::{NoiseEvaluator, RigidNoise, SimpleNoise, evaluator_for_layer};
pub use min_max::MinMax;

/// Anything the terrain projector can sample elevation from.
///
/// Sampling takes `&mut self` because implementations track running
/// statistics over the emitted values.
pub trait ElevationSource {
    /// Ocean-relative elevation at a unit-sphere point.
    fn sample(&mut self, point: glam::DVec3) -> f64;
}

impl ElevationSource for ElevationField {
    fn sample(&mut self, point: glam::DVec3) -> f64 {
        ElevationField::sample(self, point)
    }
}
