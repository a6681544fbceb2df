//! Mesh buffers shared by the terrain and ocean pipelines.

mod aabb;
mod mesh_data;

pub use aabb::Aabb;
pub use mesh_data::{CombinedOffsets, MeshData, combine};
