//! The 16-entry marching-squares lookup table for shoreline cells.
//!
//! A cell is the square between four adjacent grid vertices. Each
//! vertex is either ocean or land, giving 16 occupancy patterns; the
//! table maps each pattern to the triangle fan that covers the cell's
//! ocean region, expressed in corners and interpolated edge crossings.

/// One corner of a cell, named by its offset from the cell origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellCorner {
    /// Top-left, the cell's addressing vertex.
    Origin = 0,
    /// Top-right.
    Right = 1,
    /// Bottom-right.
    DownRight = 2,
    /// Bottom-left.
    Down = 3,
}

impl CellCorner {
    /// All four corners in slot order (clockwise from the origin).
    pub const ALL: [CellCorner; 4] = [
        CellCorner::Origin,
        CellCorner::Right,
        CellCorner::DownRight,
        CellCorner::Down,
    ];

    /// Corner slot, `0..4`.
    #[must_use]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Grid-space offset `(dx, dy)` from the cell origin.
    #[must_use]
    pub fn offset(self) -> (usize, usize) {
        match self {
            CellCorner::Origin => (0, 0),
            CellCorner::Right => (1, 0),
            CellCorner::DownRight => (1, 1),
            CellCorner::Down => (0, 1),
        }
    }
}

/// One side of a cell. A shoreline crossing on a side is interpolated
/// between the side's two corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellEdge {
    /// Top side, between `Origin` and `Right`.
    North = 0,
    /// Right side, between `Right` and `DownRight`.
    East = 1,
    /// Bottom side, between `DownRight` and `Down`.
    South = 2,
    /// Left side, between `Down` and `Origin`.
    West = 3,
}

impl CellEdge {
    /// Edge slot, `0..4`.
    #[must_use]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The two corners this edge connects, in clockwise walk order.
    #[must_use]
    pub fn corner_slots(self) -> (CellCorner, CellCorner) {
        match self {
            CellEdge::North => (CellCorner::Origin, CellCorner::Right),
            CellEdge::East => (CellCorner::Right, CellCorner::DownRight),
            CellEdge::South => (CellCorner::DownRight, CellCorner::Down),
            CellEdge::West => (CellCorner::Down, CellCorner::Origin),
        }
    }
}

/// A triangle vertex in the contour table: either a cell corner (an
/// ocean grid vertex) or an interpolated crossing on a cell side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellPoint {
    /// An ocean grid vertex at this corner.
    Corner(CellCorner),
    /// The shoreline crossing on this side.
    Edge(CellEdge),
}

/// Occupancy index of a cell from its four corner ocean flags.
///
/// Bit weights follow clockwise corner order from the origin:
/// origin = 8, right = 4, down-right = 2, down = 1.
#[must_use]
pub fn occupancy_index(origin: bool, right: bool, down_right: bool, down: bool) -> usize {
    (origin as usize) * 8 + (right as usize) * 4 + (down_right as usize) * 2 + (down as usize)
}

use CellCorner::{Down, DownRight, Origin, Right};
use CellPoint::{Corner, Edge};

const N: CellPoint = Edge(CellEdge::North);
const E: CellPoint = Edge(CellEdge::East);
const S: CellPoint = Edge(CellEdge::South);
const W: CellPoint = Edge(CellEdge::West);

/// Triangle fans per occupancy pattern, as flat vertex triples wound
/// clockwise (viewed with grid y increasing downward). Entry `k` covers
/// the ocean region of pattern `k`; pattern 0 is all land and pattern
/// 15 is fully submerged, so those emit no crossings.
pub const CONTOUR_TABLE: [&[CellPoint]; 16] = [
    // 0b0000: no ocean.
    &[],
    // 0b0001: down only.
    &[W, S, Corner(Down)],
    // 0b0010: down-right only.
    &[E, Corner(DownRight), S],
    // 0b0011: bottom half.
    &[W, Corner(DownRight), Corner(Down), W, E, Corner(DownRight)],
    // 0b0100: right only.
    &[N, Corner(Right), E],
    // 0b0101: right and down; both crossings kept, ambiguous saddle
    // bridged through the cell.
    &[
        W,
        S,
        Corner(Down),
        W,
        N,
        S,
        N,
        E,
        S,
        N,
        Corner(Right),
        E,
    ],
    // 0b0110: right half.
    &[N, Corner(Right), Corner(DownRight), N, Corner(DownRight), S],
    // 0b0111: all but origin.
    &[
        W,
        Corner(DownRight),
        Corner(Down),
        N,
        Corner(DownRight),
        W,
        N,
        Corner(Right),
        Corner(DownRight),
    ],
    // 0b1000: origin only.
    &[W, Corner(Origin), N],
    // 0b1001: left half.
    &[Corner(Origin), N, S, Corner(Origin), S, Corner(Down)],
    // 0b1010: origin and down-right; the other saddle.
    &[
        Corner(Origin),
        N,
        W,
        W,
        N,
        E,
        W,
        E,
        S,
        S,
        E,
        Corner(DownRight),
    ],
    // 0b1011: all but right.
    &[
        Corner(Origin),
        N,
        Corner(Down),
        N,
        E,
        Corner(Down),
        E,
        Corner(DownRight),
        Corner(Down),
    ],
    // 0b1100: top half.
    &[W, Corner(Origin), E, Corner(Origin), Corner(Right), E],
    // 0b1101: all but down-right.
    &[
        Corner(Origin),
        Corner(Right),
        E,
        Corner(Origin),
        E,
        S,
        Corner(Origin),
        S,
        Corner(Down),
    ],
    // 0b1110: all but down.
    &[
        Corner(Origin),
        Corner(Right),
        W,
        Corner(Right),
        Corner(DownRight),
        S,
        Corner(Right),
        S,
        W,
    ],
    // 0b1111: fully submerged.
    &[
        Corner(Origin),
        Corner(Right),
        Corner(DownRight),
        Corner(Origin),
        Corner(DownRight),
        Corner(Down),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_of(pattern: &[CellPoint]) -> Vec<CellEdge> {
        let mut edges: Vec<CellEdge> = pattern
            .iter()
            .filter_map(|p| match p {
                CellPoint::Edge(e) => Some(*e),
                CellPoint::Corner(_) => None,
            })
            .collect();
        edges.sort_by_key(|e| e.slot());
        edges.dedup();
        edges
    }

    #[test]
    fn test_every_entry_is_whole_triangles() {
        for (k, pattern) in CONTOUR_TABLE.iter().enumerate() {
            assert_eq!(pattern.len() % 3, 0, "Pattern {k} is not a triangle list");
        }
    }

    #[test]
    fn test_empty_and_full_cells_emit_no_crossings() {
        assert!(CONTOUR_TABLE[0].is_empty());
        assert!(edges_of(CONTOUR_TABLE[15]).is_empty());
        assert_eq!(CONTOUR_TABLE[15].len(), 6, "Full cell is two triangles");
    }

    #[test]
    fn test_only_ocean_corners_appear() {
        for k in 0..16 {
            for point in CONTOUR_TABLE[k] {
                if let CellPoint::Corner(c) = point {
                    let bit = 8 >> c.slot();
                    assert_ne!(k & bit, 0, "Pattern {k} references land corner {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_crossings_sit_on_mixed_sides() {
        // An edge crossing only exists where exactly one of the side's
        // corners is ocean.
        for k in 0..16 {
            for edge in edges_of(CONTOUR_TABLE[k]) {
                let (a, b) = edge.corner_slots();
                let a_ocean = k & (8 >> a.slot()) != 0;
                let b_ocean = k & (8 >> b.slot()) != 0;
                assert_ne!(
                    a_ocean, b_ocean,
                    "Pattern {k} crosses side {edge:?} without a class change"
                );
            }
        }
    }

    #[test]
    fn test_complementary_patterns_share_crossings() {
        // Inverting ocean and land moves the same shoreline, so k and
        // 15-k use the same set of edge crossings.
        for k in 0..16 {
            assert_eq!(
                edges_of(CONTOUR_TABLE[k]),
                edges_of(CONTOUR_TABLE[15 - k]),
                "Patterns {k} and {} disagree on crossings",
                15 - k
            );
        }
    }

    #[test]
    fn test_occupancy_index_bit_weights() {
        assert_eq!(occupancy_index(false, false, false, false), 0);
        assert_eq!(occupancy_index(true, false, false, false), 8);
        assert_eq!(occupancy_index(false, true, false, false), 4);
        assert_eq!(occupancy_index(false, false, true, false), 2);
        assert_eq!(occupancy_index(false, false, false, true), 1);
        assert_eq!(occupancy_index(true, true, true, true), 15);
    }

    #[test]
    fn test_corner_offsets_walk_clockwise() {
        assert_eq!(CellCorner::Origin.offset(), (0, 0));
        assert_eq!(CellCorner::Right.offset(), (1, 0));
        assert_eq!(CellCorner::DownRight.offset(), (1, 1));
        assert_eq!(CellCorner::Down.offset(), (0, 1));
    }
}
