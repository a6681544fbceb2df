//! The four boundary edges of a face grid and their walk order.

use glam::DVec3;

use crate::CubeFace;

/// One of the four boundary edges of a face grid.
///
/// Edges are walked clockwise in grid space: north runs left→right
/// along `y = 0`, east top→bottom along `x = last`, south right→left
/// along `y = last`, and west bottom→top along `x = 0`. Walking every
/// edge in this order means a boundary cell's index along its edge is
/// well defined, and two adjacent faces can line their boundary cells
/// up against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceEdge {
    /// Top edge, `y = 0`, walked in increasing `x`.
    North = 0,
    /// Right edge, `x = resolution-1`, walked in increasing `y`.
    East = 1,
    /// Bottom edge, `y = resolution-1`, walked in decreasing `x`.
    South = 2,
    /// Left edge, `x = 0`, walked in decreasing `y`.
    West = 3,
}

impl FaceEdge {
    /// All four edges in index order.
    pub const ALL: [FaceEdge; 4] = [
        FaceEdge::North,
        FaceEdge::East,
        FaceEdge::South,
        FaceEdge::West,
    ];

    /// Edge index, `0..4`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Grid coordinates of the `i`-th boundary cell along this edge.
    ///
    /// Cells are addressed by their top-left corner, so valid cell
    /// coordinates run `0..resolution-1`. South and west indices run
    /// reversed so that `i` always increases along the edge walk.
    #[must_use]
    pub fn cell_coords(self, i: usize, resolution: usize) -> (usize, usize) {
        let last_cell = resolution - 2;
        match self {
            FaceEdge::North => (i, 0),
            FaceEdge::East => (last_cell, i),
            FaceEdge::South => (last_cell - i, last_cell),
            FaceEdge::West => (0, last_cell - i),
        }
    }

    /// The ordered `(start, end)` endpoints of this edge on the
    /// `[-1, 1]` cube, in walk order.
    ///
    /// Cube corners have exactly `±1` components, computed from exact
    /// sums of axis vectors, so endpoint positions can be compared
    /// bit-for-bit when deriving face adjacency.
    #[must_use]
    pub fn endpoints(self, face: CubeFace) -> (DVec3, DVec3) {
        let n = face.normal();
        let t = face.tangent();
        let b = face.bitangent();
        let tl = n - t - b;
        let tr = n + t - b;
        let br = n + t + b;
        let bl = n - t + b;
        match self {
            FaceEdge::North => (tl, tr),
            FaceEdge::East => (tr, br),
            FaceEdge::South => (br, bl),
            FaceEdge::West => (bl, tl),
        }
    }
}
