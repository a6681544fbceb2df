//! Marching-squares shoreline contouring over one classified face grid.

use pelago_cubesphere::{CubeFace, FaceEdge, FaceGrid, cube_map_uv};
use pelago_mesh::MeshData;
use pelago_terrain::GridVertex;
use tracing::debug;

use crate::cell::{CONTOUR_TABLE, CellCorner, CellEdge, CellPoint, occupancy_index};
use crate::error::OceanError;
use crate::navigator::GridNavigator;
use crate::triangle_cell::EdgeCells;
use crate::weld::WELD_EPSILON_SQ;

/// The ocean surface of one face, plus the boundary-cell buckets the
/// seam welder consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct OceanFaceMesh {
    /// The face this mesh covers.
    pub face: CubeFace,
    /// Grid resolution the mesh was contoured at.
    pub resolution: usize,
    /// Ocean surface triangles for this face.
    pub mesh: MeshData,
    /// Triangle buckets for every boundary cell.
    pub edge_cells: EdgeCells,
}

/// Contours the ocean region of one classified face grid.
///
/// The vertex buffer starts with every ocean grid vertex in grid order,
/// so a grid vertex's `vertex_array_index` is its mesh index directly.
/// Shoreline crossings are appended behind them as they are discovered,
/// and crossings shared between neighboring cells are reused through
/// two row buffers instead of being emitted twice.
pub struct ContourMesher {
    grid: FaceGrid,
    radius: f64,
    navigator: GridNavigator,
}

impl ContourMesher {
    /// Create a mesher for one face grid.
    #[must_use]
    pub fn new(grid: FaceGrid, radius: f64) -> Self {
        Self {
            grid,
            radius,
            navigator: GridNavigator::new(grid.resolution),
        }
    }

    /// Contour the grid into an ocean face mesh.
    ///
    /// Cells whose top-left vertex is neither ocean nor shore are
    /// skipped outright; every corner of such a cell is a neighbor of
    /// the top-left vertex, so an ocean corner would have flagged it.
    pub fn build(&self, grid_vertices: &[GridVertex]) -> Result<OceanFaceMesh, OceanError> {
        let resolution = self.grid.resolution;
        let expected = self.grid.vertex_count();
        if grid_vertices.len() != expected {
            return Err(OceanError::GridSizeMismatch {
                expected,
                actual: grid_vertices.len(),
            });
        }

        let mut mesh = MeshData::new();
        for v in grid_vertices {
            if v.is_ocean {
                mesh.positions.push(v.position.as_vec3());
                mesh.uvs.push(cube_map_uv(v.position));
            }
        }

        let nav = &self.navigator;
        let cell_count = resolution - 1;
        let mut edge_cells = EdgeCells::new(resolution);
        // Crossing indices of the previous and current cell row, one
        // `[Option<u32>; 4]` per cell keyed by cell edge slot.
        let mut prev_row: Vec<[Option<u32>; 4]> = vec![[None; 4]; cell_count];
        let mut curr_row: Vec<[Option<u32>; 4]> = vec![[None; 4]; cell_count];

        for y in 0..cell_count {
            for slots in &mut curr_row {
                *slots = [None; 4];
            }
            for x in 0..cell_count {
                let origin = x + y * resolution;
                let tl = &grid_vertices[origin];
                if !tl.is_ocean && !tl.is_shore {
                    continue;
                }

                let corner_index = |corner: CellCorner| match corner {
                    CellCorner::Origin => origin,
                    CellCorner::Right => nav.offset(origin, nav.right),
                    CellCorner::DownRight => nav.offset(origin, nav.down_right),
                    CellCorner::Down => nav.offset(origin, nav.down),
                };
                let occupancy = occupancy_index(
                    grid_vertices[corner_index(CellCorner::Origin)].is_ocean,
                    grid_vertices[corner_index(CellCorner::Right)].is_ocean,
                    grid_vertices[corner_index(CellCorner::DownRight)].is_ocean,
                    grid_vertices[corner_index(CellCorner::Down)].is_ocean,
                );
                let pattern = CONTOUR_TABLE[occupancy];

                for tri in pattern.chunks_exact(3) {
                    let slot = mesh.indices.len() as u32;
                    for point in tri {
                        let index = match point {
                            CellPoint::Corner(c) => {
                                grid_vertices[corner_index(*c)].vertex_array_index
                            }
                            CellPoint::Edge(e) => self.crossing_vertex(
                                x,
                                y,
                                *e,
                                grid_vertices,
                                &mut mesh,
                                &prev_row,
                                &mut curr_row,
                            ),
                        };
                        mesh.indices.push(index);
                    }

                    if y == 0 {
                        record_slot(&mut edge_cells, self.grid.face, FaceEdge::North, x, slot)?;
                    }
                    if x == cell_count - 1 {
                        record_slot(&mut edge_cells, self.grid.face, FaceEdge::East, y, slot)?;
                    }
                    if y == cell_count - 1 {
                        let i = cell_count - 1 - x;
                        record_slot(&mut edge_cells, self.grid.face, FaceEdge::South, i, slot)?;
                    }
                    if x == 0 {
                        let i = cell_count - 1 - y;
                        record_slot(&mut edge_cells, self.grid.face, FaceEdge::West, i, slot)?;
                    }
                }
            }
            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        mesh.recalculate_normals();
        debug!(
            face = ?self.grid.face,
            vertices = mesh.positions.len(),
            triangles = mesh.triangle_count(),
            "contoured ocean face"
        );

        Ok(OceanFaceMesh {
            face: self.grid.face,
            resolution,
            mesh,
            edge_cells,
        })
    }

    /// Resolve the shoreline crossing on one side of cell `(x, y)`,
    /// reusing a crossing already emitted by this cell, the cell to the
    /// left, or the cell above when one sits at the same position.
    #[allow(clippy::too_many_arguments)]
    fn crossing_vertex(
        &self,
        x: usize,
        y: usize,
        edge: CellEdge,
        grid_vertices: &[GridVertex],
        mesh: &mut MeshData,
        prev_row: &[[Option<u32>; 4]],
        curr_row: &mut [[Option<u32>; 4]],
    ) -> u32 {
        let resolution = self.grid.resolution;
        let (ca, cb) = edge.corner_slots();
        let (ax, ay) = (x + ca.offset().0, y + ca.offset().1);
        let (bx, by) = (x + cb.offset().0, y + cb.offset().1);

        // Distances are shifted by one so the shoreline sits at 1, not
        // at 0 where the interpolation would divide by tiny numbers.
        let a = grid_vertices[ax + ay * resolution].distance_to_ocean_level + 1.0;
        let b = grid_vertices[bx + by * resolution].distance_to_ocean_level + 1.0;
        let t = if (b - a).abs() < 1e-9 {
            0.5
        } else {
            (1.0 - a) / (b - a)
        };
        let gx = ax as f64 + t * (bx as f64 - ax as f64);
        let gy = ay as f64 + t * (by as f64 - ay as f64);
        let sphere_point = self.grid.unit_sphere_point(gx, gy);
        let position = (sphere_point * self.radius).as_vec3();

        let candidates = [
            Some(&curr_row[x]),
            if x > 0 { Some(&curr_row[x - 1]) } else { None },
            if y > 0 { Some(&prev_row[x]) } else { None },
        ];
        for slots in candidates.into_iter().flatten() {
            for index in slots.iter().flatten() {
                if mesh.positions[*index as usize].distance_squared(position) <= WELD_EPSILON_SQ {
                    return *index;
                }
            }
        }

        let index = mesh.positions.len() as u32;
        mesh.positions.push(position);
        mesh.uvs.push(cube_map_uv(sphere_point));
        curr_row[x][edge.slot()] = Some(index);
        index
    }
}

fn record_slot(
    edge_cells: &mut EdgeCells,
    face: CubeFace,
    edge: FaceEdge,
    cell: usize,
    slot: u32,
) -> Result<(), OceanError> {
    edge_cells
        .bucket_mut(edge, cell)
        .push(slot)
        .map_err(|_| OceanError::CellCapacityExceeded { face, edge, cell })
}
