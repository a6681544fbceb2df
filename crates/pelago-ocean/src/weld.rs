//! Seam welding of the six ocean face meshes into one surface.

use pelago_cubesphere::{CubeFace, FaceEdge, adjacency_table};
use pelago_mesh::{Aabb, MeshData, combine};
use tracing::debug;

use crate::contour::OceanFaceMesh;

/// Squared distance under which two seam vertices count as the same
/// point. Loose enough to absorb the floating point noise between two
/// faces projecting the same cube point, tight enough to never reach
/// the next grid vertex at practical resolutions.
pub const WELD_EPSILON_SQ: f32 = 1e-6;

/// The welded whole-planet ocean surface.
#[derive(Clone, Debug)]
pub struct WeldedOcean {
    /// Combined mesh with seam indices redirected.
    pub mesh: MeshData,
    /// Bounding box of the combined vertex buffer, `None` when no face
    /// emitted any ocean.
    pub bounds: Option<Aabb>,
}

/// Stitches the six face meshes along the cube's 12 shared edges.
///
/// Welding never moves or deletes vertices. For every pair of adjacent
/// boundary cells, any triangle index on the partner side whose vertex
/// coincides with one on this side is redirected to this side's vertex;
/// duplicates merely become unreferenced. Redirects chain at cube
/// corners where three faces meet, because later seams read the already
/// rewritten indices.
pub struct SeamWelder;

impl SeamWelder {
    /// Weld the six face meshes into one.
    #[must_use]
    pub fn weld(faces: &[OceanFaceMesh; 6]) -> WeldedOcean {
        let (mut mesh, offsets) = combine(faces.iter().map(|f| &f.mesh));
        let table = adjacency_table();
        let mut visited = [[false; 4]; 6];
        let mut redirects = 0usize;

        for face in CubeFace::ALL {
            for edge in FaceEdge::ALL {
                if visited[face.index()][edge.index()] {
                    continue;
                }
                let adj = table[face.index()][edge.index()];
                visited[face.index()][edge.index()] = true;
                visited[adj.face.index()][adj.edge.index()] = true;

                let this = &faces[face.index()];
                let other = &faces[adj.face.index()];
                let cell_count = this.resolution - 1;
                debug_assert_eq!(
                    cell_count,
                    other.resolution - 1,
                    "adjacent faces must share a resolution"
                );

                for i in 0..cell_count {
                    let j = if adj.reversed { cell_count - 1 - i } else { i };
                    redirects += weld_buckets(
                        &mut mesh,
                        this.edge_cells.bucket(edge, i).slots(),
                        offsets[face.index()].index_offset,
                        other.edge_cells.bucket(adj.edge, j).slots(),
                        offsets[adj.face.index()].index_offset,
                    );
                }
            }
        }

        mesh.recalculate_normals();
        let bounds = mesh.bounds();
        debug!(
            vertices = mesh.positions.len(),
            triangles = mesh.triangle_count(),
            redirects,
            "welded ocean seams"
        );
        WeldedOcean { mesh, bounds }
    }
}

/// Redirect partner-side triangle indices onto matching vertices of
/// this side. Returns how many indices were rewritten.
fn weld_buckets(
    mesh: &mut MeshData,
    this_slots: &[u32],
    this_offset: usize,
    other_slots: &[u32],
    other_offset: usize,
) -> usize {
    let mut redirects = 0;
    for &other_slot in other_slots {
        for k in 0..3 {
            let other_at = other_offset + other_slot as usize + k;
            let other_index = mesh.indices[other_at];
            let other_position = mesh.positions[other_index as usize];
            'search: for &this_slot in this_slots {
                for m in 0..3 {
                    let this_index = mesh.indices[this_offset + this_slot as usize + m];
                    if this_index == other_index {
                        break 'search;
                    }
                    let this_position = mesh.positions[this_index as usize];
                    if this_position.distance_squared(other_position) <= WELD_EPSILON_SQ {
                        mesh.indices[other_at] = this_index;
                        redirects += 1;
                        break 'search;
                    }
                }
            }
        }
    }
    redirects
}
