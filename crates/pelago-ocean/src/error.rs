//! Ocean pipeline errors.

use pelago_cubesphere::{CubeFace, FaceEdge};
use thiserror::Error;

/// Failures raised while contouring or welding the ocean surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OceanError {
    /// A boundary cell emitted more triangles than its bucket holds.
    #[error(
        "boundary cell {cell} on edge {edge:?} of face {face:?} exceeded its triangle capacity"
    )]
    CellCapacityExceeded {
        /// Face the cell belongs to.
        face: CubeFace,
        /// Boundary edge the cell sits on.
        edge: FaceEdge,
        /// Cell index along the edge walk.
        cell: usize,
    },

    /// The classified grid does not match the mesher's resolution.
    #[error("grid vertex count {actual} does not match expected {expected}")]
    GridSizeMismatch {
        /// Vertex count the mesher's resolution implies.
        expected: usize,
        /// Vertex count actually supplied.
        actual: usize,
    },
}
