//! Per-cell triangle buckets along face boundaries.
//!
//! The seam welder only ever touches triangles whose cell lies on a
//! face boundary. Each boundary cell records the triangle-array slots
//! it emitted into a small fixed bucket, so the welder can find both
//! sides of a seam without scanning whole index buffers.

use pelago_cubesphere::FaceEdge;

/// Most triangle slots one cell can emit. The densest pattern fans
/// five triangles, and a corner cell is recorded on two edges, so 15
/// leaves headroom without heap allocation.
pub const TRIANGLE_CELL_CAPACITY: usize = 15;

/// A boundary cell's bucket overflowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangleCellFull;

/// Fixed-capacity bucket of triangle-array slots for one boundary cell.
///
/// Each entry is the offset of a triangle's first index in the face
/// mesh's index buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleCell {
    slots: [u32; TRIANGLE_CELL_CAPACITY],
    len: u8,
}

impl TriangleCell {
    /// An empty bucket.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [0; TRIANGLE_CELL_CAPACITY],
            len: 0,
        }
    }

    /// Record one triangle slot.
    pub fn push(&mut self, slot: u32) -> Result<(), TriangleCellFull> {
        if self.len as usize == TRIANGLE_CELL_CAPACITY {
            return Err(TriangleCellFull);
        }
        self.slots[self.len as usize] = slot;
        self.len += 1;
        Ok(())
    }

    /// The recorded slots.
    #[must_use]
    pub fn slots(&self) -> &[u32] {
        &self.slots[..self.len as usize]
    }

    /// Number of recorded slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True when no triangles were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for TriangleCell {
    fn default() -> Self {
        Self::new()
    }
}

/// The four boundary-cell rings of one face, indexed by [`FaceEdge`]
/// and cell position along the edge walk.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeCells {
    cells: [Vec<TriangleCell>; 4],
}

impl EdgeCells {
    /// Empty buckets for a face grid of the given resolution.
    #[must_use]
    pub fn new(resolution: usize) -> Self {
        let per_edge = resolution - 1;
        Self {
            cells: std::array::from_fn(|_| vec![TriangleCell::new(); per_edge]),
        }
    }

    /// Cells per edge.
    #[must_use]
    pub fn cells_per_edge(&self) -> usize {
        self.cells[0].len()
    }

    /// The `i`-th bucket along an edge walk.
    #[must_use]
    pub fn bucket(&self, edge: FaceEdge, i: usize) -> &TriangleCell {
        &self.cells[edge.index()][i]
    }

    /// Mutable access to the `i`-th bucket along an edge walk.
    pub fn bucket_mut(&mut self, edge: FaceEdge, i: usize) -> &mut TriangleCell {
        &mut self.cells[edge.index()][i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_up_to_capacity_then_overflow() {
        let mut cell = TriangleCell::new();
        for i in 0..TRIANGLE_CELL_CAPACITY as u32 {
            cell.push(i * 3).expect("capacity not yet reached");
        }
        assert_eq!(cell.len(), TRIANGLE_CELL_CAPACITY);
        assert_eq!(cell.push(99), Err(TriangleCellFull));
        assert_eq!(cell.slots()[0], 0);
        assert_eq!(cell.slots()[TRIANGLE_CELL_CAPACITY - 1], (TRIANGLE_CELL_CAPACITY as u32 - 1) * 3);
    }

    #[test]
    fn test_edge_cells_sized_by_resolution() {
        let cells = EdgeCells::new(8);
        assert_eq!(cells.cells_per_edge(), 7);
        for edge in FaceEdge::ALL {
            for i in 0..7 {
                assert!(cells.bucket(edge, i).is_empty());
            }
        }
    }

    #[test]
    fn test_buckets_are_independent() {
        let mut cells = EdgeCells::new(4);
        cells.bucket_mut(FaceEdge::North, 1).push(12).unwrap();
        assert_eq!(cells.bucket(FaceEdge::North, 1).slots(), &[12]);
        assert!(cells.bucket(FaceEdge::North, 0).is_empty());
        assert!(cells.bucket(FaceEdge::South, 1).is_empty());
    }
}
