//! Face/edge adjacency for the cube's 12 shared edges.
//!
//! Every face edge borders exactly one edge of one other face. The
//! seam welder needs to know which, and whether the two faces walk the
//! shared edge in the same or opposite direction. Rather than
//! hand-maintaining a 24-entry table that silently drifts out of sync
//! with the face basis vectors, the table is derived from the exact
//! cube-corner endpoints of each edge.

use crate::{CubeFace, FaceEdge};

/// The partner of one face edge: which face and edge it borders, and
/// whether the two edge walks run in opposite directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeAdjacency {
    /// The adjacent face.
    pub face: CubeFace,
    /// Which edge of the adjacent face touches this one.
    pub edge: FaceEdge,
    /// True when the partner edge is walked in the opposite direction,
    /// i.e. boundary cell `i` on this edge lines up with cell
    /// `cell_count - 1 - i` on the partner edge.
    pub reversed: bool,
}

/// Derive the full 6×4 adjacency table.
///
/// Cube corner positions are exact `±1` sums in f64 (see
/// [`FaceEdge::endpoints`]), so endpoint pairs are matched with plain
/// equality. Each of the 24 entries has exactly one partner and the
/// relation is reciprocal.
#[must_use]
pub fn adjacency_table() -> [[EdgeAdjacency; 4]; 6] {
    CubeFace::ALL.map(|face| FaceEdge::ALL.map(|edge| partner_of(face, edge)))
}

fn partner_of(face: CubeFace, edge: FaceEdge) -> EdgeAdjacency {
    let (start, end) = edge.endpoints(face);
    for other in CubeFace::ALL {
        if other == face {
            continue;
        }
        for other_edge in FaceEdge::ALL {
            let (os, oe) = other_edge.endpoints(other);
            if start == oe && end == os {
                return EdgeAdjacency {
                    face: other,
                    edge: other_edge,
                    reversed: true,
                };
            }
            if start == os && end == oe {
                return EdgeAdjacency {
                    face: other,
                    edge: other_edge,
                    reversed: false,
                };
            }
        }
    }
    // Unreachable for a closed cube: every edge is shared by two faces.
    unreachable!("no partner edge for {face:?} {edge:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_edge_has_a_partner_on_another_face() {
        let table = adjacency_table();
        for face in CubeFace::ALL {
            for edge in FaceEdge::ALL {
                let adj = table[face.index()][edge.index()];
                assert_ne!(adj.face, face, "{face:?} {edge:?} must border a different face");
            }
        }
    }

    #[test]
    fn test_adjacency_is_reciprocal() {
        let table = adjacency_table();
        for face in CubeFace::ALL {
            for edge in FaceEdge::ALL {
                let adj = table[face.index()][edge.index()];
                let back = table[adj.face.index()][adj.edge.index()];
                assert_eq!(back.face, face, "Partner of partner must return to {face:?}");
                assert_eq!(back.edge, edge);
                assert_eq!(
                    back.reversed, adj.reversed,
                    "Direction flag must agree from both sides"
                );
            }
        }
    }

    #[test]
    fn test_twelve_unique_cube_edges() {
        let table = adjacency_table();
        let mut seen = [[false; 4]; 6];
        let mut unique = 0;
        for face in CubeFace::ALL {
            for edge in FaceEdge::ALL {
                if seen[face.index()][edge.index()] {
                    continue;
                }
                let adj = table[face.index()][edge.index()];
                seen[face.index()][edge.index()] = true;
                seen[adj.face.index()][adj.edge.index()] = true;
                unique += 1;
            }
        }
        assert_eq!(unique, 12, "A cube has 12 geometric edges");
    }

    #[test]
    fn test_partner_endpoints_coincide() {
        let table = adjacency_table();
        for face in CubeFace::ALL {
            for edge in FaceEdge::ALL {
                let adj = table[face.index()][edge.index()];
                let (s, e) = edge.endpoints(face);
                let (os, oe) = adj.edge.endpoints(adj.face);
                if adj.reversed {
                    assert_eq!(s, oe);
                    assert_eq!(e, os);
                } else {
                    assert_eq!(s, os);
                    assert_eq!(e, oe);
                }
            }
        }
    }
}
