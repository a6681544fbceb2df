//! Projection of a face-local vertex grid onto the unit sphere.

use glam::DVec3;

use crate::CubeFace;

/// A `resolution × resolution` vertex grid on one cube face.
///
/// Grid coordinates run from `(0, 0)` at the face's top-left corner to
/// `(resolution-1, resolution-1)` at the bottom-right; `x` increases
/// along the face tangent and `y` along the bitangent. Fractional
/// coordinates are valid; the contour mesher projects shoreline
/// crossings that sit between grid points.
#[derive(Clone, Copy, Debug)]
pub struct FaceGrid {
    /// Which cube face this grid covers.
    pub face: CubeFace,
    /// Number of vertices per side. Must be at least 2.
    pub resolution: usize,
}

impl FaceGrid {
    /// Create a grid for one face.
    #[must_use]
    pub fn new(face: CubeFace, resolution: usize) -> Self {
        debug_assert!(resolution >= 2, "resolution must be at least 2");
        Self { face, resolution }
    }

    /// Number of vertices in the grid (`resolution²`).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Map (possibly fractional) grid coordinates to a point on the
    /// `[-1, 1]` cube surface.
    #[inline]
    #[must_use]
    pub fn cube_point(&self, x: f64, y: f64) -> DVec3 {
        let last = (self.resolution - 1) as f64;
        let px = x / last;
        let py = y / last;
        self.face.normal()
            + (px - 0.5) * 2.0 * self.face.tangent()
            + (py - 0.5) * 2.0 * self.face.bitangent()
    }

    /// Map grid coordinates to a point on the unit sphere.
    ///
    /// The cube point is normalized radially; adjacent faces sample the
    /// shared edge at identical cube points, so the projection is
    /// continuous across seams.
    #[inline]
    #[must_use]
    pub fn unit_sphere_point(&self, x: f64, y: f64) -> DVec3 {
        self.cube_point(x, y).normalize()
    }

    /// Grid x coordinate of a flattened vertex index.
    #[inline]
    #[must_use]
    pub fn x_of(&self, index: usize) -> usize {
        index % self.resolution
    }

    /// Grid y coordinate of a flattened vertex index.
    #[inline]
    #[must_use]
    pub fn y_of(&self, index: usize) -> usize {
        index / self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_grid_points_on_unit_sphere() {
        for face in CubeFace::ALL {
            let grid = FaceGrid::new(face, 5);
            for y in 0..5 {
                for x in 0..5 {
                    let p = grid.unit_sphere_point(x as f64, y as f64);
                    assert!(
                        (p.length() - 1.0).abs() < 1e-12,
                        "Grid point ({x}, {y}) of {face:?} not on unit sphere"
                    );
                }
            }
        }
    }

    #[test]
    fn test_grid_center_maps_to_face_normal() {
        for face in CubeFace::ALL {
            let grid = FaceGrid::new(face, 9);
            let p = grid.unit_sphere_point(4.0, 4.0);
            assert!(
                (p - face.normal()).length() < 1e-12,
                "Center of {face:?} should project to its normal"
            );
        }
    }

    #[test]
    fn test_corners_hit_cube_corners() {
        let grid = FaceGrid::new(CubeFace::PosY, 4);
        let c = grid.cube_point(0.0, 0.0);
        assert!(
            c.x.abs() == 1.0 && c.y.abs() == 1.0 && c.z.abs() == 1.0,
            "Grid corner should land on a cube corner, got {c:?}"
        );
    }

    #[test]
    fn test_fractional_coordinates_interpolate() {
        let grid = FaceGrid::new(CubeFace::PosX, 4);
        let a = grid.cube_point(1.0, 2.0);
        let b = grid.cube_point(2.0, 2.0);
        let mid = grid.cube_point(1.5, 2.0);
        assert!(
            (mid - (a + b) * 0.5).length() < 1e-12,
            "Cube point must be linear in grid coordinates"
        );
    }

    #[test]
    fn test_shared_edge_projects_identically() {
        // Two adjacent faces sample the same cube point along their
        // shared edge, so the sphere points must agree to fp precision.
        let res = 7;
        let up = FaceGrid::new(CubeFace::PosY, res);
        let forward = FaceGrid::new(CubeFace::PosZ, res);
        let mut matched = 0;
        for i in 0..res {
            let p = up.unit_sphere_point(i as f64, 0.0);
            for y in 0..res {
                for x in 0..res {
                    let q = forward.unit_sphere_point(x as f64, y as f64);
                    if (p - q).length() < 1e-12 {
                        matched += 1;
                    }
                }
            }
        }
        assert_eq!(matched, res, "Every edge vertex must have a twin on the neighbor face");
    }

    #[test]
    fn test_index_to_coords_roundtrip() {
        let grid = FaceGrid::new(CubeFace::NegZ, 6);
        for i in 0..grid.vertex_count() {
            let (x, y) = (grid.x_of(i), grid.y_of(i));
            assert_eq!(x + y * 6, i);
        }
    }
}
