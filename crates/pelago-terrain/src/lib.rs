//! Per-face terrain meshing and ocean/shore classification.
//!
//! One [`TerrainFace`] covers one cube face: it samples the elevation
//! field across the face grid, builds the displaced terrain mesh, and
//! classifies every grid vertex for the ocean contour mesher.

mod grid_vertex;
mod terrain_face;

pub use grid_vertex::GridVertex;
pub use terrain_face::{TerrainFace, TerrainFaceOutput};
