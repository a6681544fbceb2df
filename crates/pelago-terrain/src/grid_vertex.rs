//! Per-grid-point classification data consumed by the contour mesher.

use glam::DVec3;

/// One grid point of a face, classified against the ocean level.
///
/// Rebuilt from scratch on every face regeneration; read-only to the
/// contour mesher.
#[derive(Clone, Copy, Debug)]
pub struct GridVertex {
    /// Point on the unit sphere scaled by the planet radius (no
    /// elevation displacement).
    pub position: DVec3,
    /// Elevation at or below the ocean level.
    pub is_ocean: bool,
    /// Not ocean itself, but at least one of the 8 grid neighbors is.
    pub is_shore: bool,
    /// Ocean-relative elevation (raw elevation minus the ocean level).
    pub distance_to_ocean_level: f64,
    /// Index into the face's emitted ocean vertex buffer. Only valid
    /// when `is_ocean` is set.
    pub vertex_array_index: u32,
}
