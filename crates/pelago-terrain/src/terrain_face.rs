//! Terrain mesh construction for one cube face.

use glam::{DVec3, Vec2};
use pelago_cubesphere::{CubeFace, FaceGrid};
use pelago_elevation::ElevationSource;
use pelago_mesh::MeshData;

use crate::GridVertex;

/// Builds the terrain mesh and classified grid for one cube face.
///
/// Construction is idempotent: every call samples into fresh buffers,
/// so repeated regeneration with identical inputs yields identical
/// output and a failed later pipeline stage never corrupts earlier
/// results.
pub struct TerrainFace {
    grid: FaceGrid,
    radius: f64,
}

/// Everything one face construction pass produces.
pub struct TerrainFaceOutput {
    /// The displaced terrain mesh. UV.y carries the ocean-relative
    /// elevation; UV.x is the biome blend, zero until
    /// [`TerrainFace::update_biome_uvs`] fills it in.
    pub mesh: MeshData,
    /// One classified entry per grid point, in grid order.
    pub grid_vertices: Vec<GridVertex>,
    /// How many grid vertices were classified as ocean.
    pub ocean_vertex_count: u32,
}

impl TerrainFace {
    /// Create a face builder.
    #[must_use]
    pub fn new(face: CubeFace, resolution: usize, radius: f64) -> Self {
        Self {
            grid: FaceGrid::new(face, resolution),
            radius,
        }
    }

    /// The face grid this builder projects through.
    #[must_use]
    pub fn grid(&self) -> FaceGrid {
        self.grid
    }

    /// Sample the elevation field across the grid and build the face.
    ///
    /// Each grid point is sampled exactly once. A vertex is ocean when
    /// its ocean-relative elevation is at or below zero; its
    /// `vertex_array_index` is the running count of ocean vertices so
    /// far, which is exactly the index the contour mesher will emit it
    /// at. The shore pass then flags land vertices bordering ocean.
    pub fn construct(&self, elevation: &mut impl ElevationSource) -> TerrainFaceOutput {
        let resolution = self.grid.resolution;
        let vertex_count = self.grid.vertex_count();

        let mut mesh = MeshData::new();
        mesh.positions.reserve(vertex_count);
        mesh.uvs.reserve(vertex_count);
        mesh.indices.reserve((resolution - 1) * (resolution - 1) * 6);
        let mut grid_vertices = Vec::with_capacity(vertex_count);
        let mut ocean_vertex_count = 0u32;

        for y in 0..resolution {
            for x in 0..resolution {
                let i = (x + y * resolution) as u32;
                let sphere_point = self.grid.unit_sphere_point(x as f64, y as f64);
                let height = elevation.sample(sphere_point);

                let displaced = sphere_point * self.radius * (1.0 + height);
                mesh.positions.push(displaced.as_vec3());
                mesh.uvs.push(Vec2::new(0.0, height as f32));

                let is_ocean = height <= 0.0;
                grid_vertices.push(GridVertex {
                    position: sphere_point * self.radius,
                    is_ocean,
                    is_shore: false,
                    distance_to_ocean_level: height,
                    vertex_array_index: ocean_vertex_count,
                });
                if is_ocean {
                    ocean_vertex_count += 1;
                }

                if x == resolution - 1 || y == resolution - 1 {
                    continue;
                }
                let down = resolution as u32;
                mesh.indices.extend_from_slice(&[i, i + down + 1, i + down]);
                mesh.indices.extend_from_slice(&[i, i + 1, i + down + 1]);
            }
        }

        mark_shore_vertices(&mut grid_vertices, resolution);
        mesh.recalculate_normals();

        TerrainFaceOutput {
            mesh,
            grid_vertices,
            ocean_vertex_count,
        }
    }

    /// Rewrite UV.x per grid point from an externally supplied biome
    /// blend function over the unit sphere.
    pub fn update_biome_uvs(&self, output: &mut TerrainFaceOutput, blend: impl Fn(DVec3) -> f32) {
        let resolution = self.grid.resolution;
        for y in 0..resolution {
            for x in 0..resolution {
                let i = x + y * resolution;
                let sphere_point = self.grid.unit_sphere_point(x as f64, y as f64);
                output.mesh.uvs[i].x = blend(sphere_point);
            }
        }
    }
}

/// Flag every land vertex that has an ocean vertex among its 8 grid
/// neighbors. Neighbors are resolved in (x, y) space so the scan never
/// wraps across grid rows.
fn mark_shore_vertices(grid_vertices: &mut [GridVertex], resolution: usize) {
    for y in 0..resolution {
        for x in 0..resolution {
            let i = x + y * resolution;
            if grid_vertices[i].is_ocean {
                continue;
            }
            'neighbors: for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= resolution as i64 || ny >= resolution as i64 {
                        continue;
                    }
                    if grid_vertices[(nx + ny * resolution as i64) as usize].is_ocean {
                        grid_vertices[i].is_shore = true;
                        break 'neighbors;
                    }
                }
            }
        }
    }
}
