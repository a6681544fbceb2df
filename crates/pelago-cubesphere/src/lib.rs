//! Cube-sphere geometry: the six cube faces, grid-to-sphere projection,
//! face/edge adjacency, and cube-map UV projection.

mod adjacency;
mod cube_face;
mod face_edge;
mod face_grid;
mod uv;

pub use adjacency::{EdgeAdjacency, adjacency_table};
pub use cube_face::CubeFace;
pub use face_edge::FaceEdge;
pub use face_grid::FaceGrid;
pub use uv::cube_map_uv;
