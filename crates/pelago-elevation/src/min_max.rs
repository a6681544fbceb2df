//! Running min/max tracker for emitted elevation values.

/// Tracks the smallest and largest value seen so far.
///
/// Consumed by coloring collaborators to normalize elevation into a
/// gradient range after a full generation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMax {
    min: f64,
    max: f64,
}

impl MinMax {
    /// An empty tracker. `min` starts above `max` so the first value
    /// recorded sets both.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Record a value.
    pub fn add(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Smallest value seen, or `None` before any value was recorded.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        (self.min <= self.max).then_some(self.min)
    }

    /// Largest value seen, or `None` before any value was recorded.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        (self.min <= self.max).then_some(self.max)
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_reports_none() {
        let mm = MinMax::new();
        assert_eq!(mm.min(), None);
        assert_eq!(mm.max(), None);
    }

    #[test]
    fn test_single_value_sets_both_bounds() {
        let mut mm = MinMax::new();
        mm.add(0.4);
        assert_eq!(mm.min(), Some(0.4));
        assert_eq!(mm.max(), Some(0.4));
    }

    #[test]
    fn test_tracks_running_extremes() {
        let mut mm = MinMax::new();
        for v in [0.2, -0.7, 1.3, 0.0] {
            mm.add(v);
        }
        assert_eq!(mm.min(), Some(-0.7));
        assert_eq!(mm.max(), Some(1.3));
    }
}
