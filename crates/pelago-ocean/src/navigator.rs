//! Signed index offsets for moving through a face grid.

/// Precomputed index arithmetic for a `resolution × resolution` grid
/// stored row-major.
///
/// Adding an offset to a flattened vertex index moves to the named
/// neighbor; only the offsets scale with resolution, the contour
/// lookup table itself is resolution-independent.
#[derive(Clone, Copy, Debug)]
pub struct GridNavigator {
    /// Vertices per side.
    pub resolution: usize,
    /// One row down, one column right.
    pub down_right: i32,
    /// One row down.
    pub down: i32,
    /// One row down, one column left.
    pub down_left: i32,
    /// One column left.
    pub left: i32,
    /// One row up, one column left.
    pub up_left: i32,
    /// One row up.
    pub up: i32,
    /// One row up, one column right.
    pub up_right: i32,
    /// One column right.
    pub right: i32,
    /// All 8 surrounding vertices, for neighborhood scans.
    pub neighbor_offsets: [i32; 8],
}

impl GridNavigator {
    /// Build the offsets for a grid of the given resolution.
    #[must_use]
    pub fn new(resolution: usize) -> Self {
        debug_assert!(resolution >= 2, "resolution must be at least 2");
        let r = resolution as i32;
        let (down_right, down, down_left) = (r + 1, r, r - 1);
        let (up_left, up, up_right) = (-r - 1, -r, -r + 1);
        let (left, right) = (-1, 1);
        Self {
            resolution,
            down_right,
            down,
            down_left,
            left,
            up_left,
            up,
            up_right,
            right,
            neighbor_offsets: [down_right, down, down_left, left, up_left, up, up_right, right],
        }
    }

    /// Grid x coordinate of a flattened index.
    #[must_use]
    pub fn x_of(&self, index: usize) -> usize {
        index % self.resolution
    }

    /// Grid y coordinate of a flattened index.
    #[must_use]
    pub fn y_of(&self, index: usize) -> usize {
        index / self.resolution
    }

    /// Apply a signed offset to a flattened index.
    #[must_use]
    pub fn offset(&self, index: usize, offset: i32) -> usize {
        (index as i32 + offset) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_move_to_the_named_neighbor() {
        let nav = GridNavigator::new(5);
        let i = 2 + 2 * 5; // center of a 5x5 grid
        assert_eq!(nav.offset(i, nav.right), 3 + 2 * 5);
        assert_eq!(nav.offset(i, nav.left), 1 + 2 * 5);
        assert_eq!(nav.offset(i, nav.up), 2 + 1 * 5);
        assert_eq!(nav.offset(i, nav.down), 2 + 3 * 5);
        assert_eq!(nav.offset(i, nav.down_right), 3 + 3 * 5);
        assert_eq!(nav.offset(i, nav.up_left), 1 + 1 * 5);
    }

    #[test]
    fn test_eight_distinct_neighbor_offsets() {
        let nav = GridNavigator::new(7);
        let mut offsets = nav.neighbor_offsets.to_vec();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&0));
    }

    #[test]
    fn test_coordinate_helpers() {
        let nav = GridNavigator::new(4);
        assert_eq!(nav.x_of(7), 3);
        assert_eq!(nav.y_of(7), 1);
        assert_eq!(nav.x_of(0), 0);
        assert_eq!(nav.y_of(15), 3);
    }
}
