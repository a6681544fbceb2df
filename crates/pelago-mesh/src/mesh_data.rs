//! Vertex/index buffers with normal recomputation and concatenation.

use glam::{Vec2, Vec3};

use crate::Aabb;

/// The output buffers of a meshing pass.
///
/// Plain position/normal/uv/index arrays, ready to hand to a renderer
/// collaborator. Indices are `u32` triples, one per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Vertex normals, parallel to `positions` (empty until
    /// [`MeshData::recalculate_normals`] runs).
    pub normals: Vec<Vec3>,
    /// Texture coordinates, parallel to `positions`.
    pub uvs: Vec<Vec2>,
    /// Triangle indices into the vertex arrays.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// An empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the mesh holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Recompute smooth vertex normals from triangle geometry.
    ///
    /// Face normals are accumulated unnormalized, so larger triangles
    /// weigh more, then each vertex normal is normalized. Degenerate
    /// triangles contribute nothing. Unreferenced vertices keep a zero
    /// normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }

    /// Bounding box over all vertex positions, or `None` for an empty
    /// vertex array.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let mut aabb = Aabb::new(first, first);
        for &p in &self.positions[1..] {
            aabb.extend(p);
        }
        Some(aabb)
    }
}

/// Per-input offsets recorded by [`combine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombinedOffsets {
    /// Index of this input's first vertex in the combined buffers.
    pub vertex_offset: u32,
    /// Index of this input's first triangle-array slot.
    pub index_offset: usize,
}

/// Concatenate meshes into one buffer, rebasing indices.
///
/// Returns the combined mesh and, per input, the vertex and
/// triangle-array offsets its data landed at. The seam welder uses
/// these to translate per-face triangle slots into combined-mesh slots.
#[must_use]
pub fn combine<'a>(
    meshes: impl IntoIterator<Item = &'a MeshData>,
) -> (MeshData, Vec<CombinedOffsets>) {
    let mut combined = MeshData::new();
    let mut offsets = Vec::new();
    for mesh in meshes {
        let base = combined.positions.len() as u32;
        offsets.push(CombinedOffsets {
            vertex_offset: base,
            index_offset: combined.indices.len(),
        });
        combined.positions.extend_from_slice(&mesh.positions);
        combined.normals.extend_from_slice(&mesh.normals);
        combined.uvs.extend_from_slice(&mesh.uvs);
        combined.indices.extend(mesh.indices.iter().map(|&i| i + base));
    }
    (combined, offsets)
}
