//! Shoreline contour meshing and cross-face seam welding.
//!
//! This is the core of the ocean pipeline: a marching-squares variant
//! over the classified face grids emits a watertight ocean surface per
//! face, and the seam welder stitches the six faces into one crack-free
//! mesh by redirecting triangle indices at the cube's 12 shared edges.

mod cell;
mod contour;
mod error;
mod navigator;
mod triangle_cell;
mod weld;

pub use cell::{CONTOUR_TABLE, CellCorner, CellEdge, CellPoint, occupancy_index};
pub use contour::{ContourMesher, OceanFaceMesh};
pub use error::OceanError;
pub use navigator::GridNavigator;
pub use triangle_cell::{EdgeCells, TRIANGLE_CELL_CAPACITY, TriangleCell, TriangleCellFull};
pub use weld::{SeamWelder, WELD_EPSILON_SQ, WeldedOcean};
