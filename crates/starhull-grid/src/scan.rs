//! Scan order for grid traversal.
//!
//! Two strategies: [`CubeScan`] walks every cell of a bounding box,
//! occupied or not, while [`PopulatedScan`] visits only cells that
//! hold a value. Both yield points in the same x-major order (x
//! outermost, then y, then z, each ascending), so consumers can rely
//! on one deterministic traversal order regardless of strategy.
//!
//! Scans own their state and hold no borrow of the grid they came
//! from: they are snapshots of the grid at construction time, and
//! mutating the grid afterwards does not affect a live scan.

use crate::bounds::GridBounds;
use crate::point::GridPoint;

/// Lazy iterator over every point of a [`GridBounds`], x-major.
///
/// Does not filter by occupancy. The number of steps is the box
/// volume, not the cell count, so prefer
/// [`SparseGrid::populated_scan`](crate::SparseGrid::populated_scan)
/// when only occupied cells matter.
#[derive(Clone, Debug)]
pub struct CubeScan {
    bounds: GridBounds,
    cursor: Option<GridPoint>,
}

impl CubeScan {
    pub(crate) fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            cursor: Some(bounds.lower),
        }
    }

    /// A scan that yields nothing, for grids with no bounds.
    pub(crate) fn exhausted() -> Self {
        Self {
            bounds: GridBounds::from_point(GridPoint::ZERO),
            cursor: None,
        }
    }

    /// Successor of `p` in x-major order, or `None` past the last cell.
    ///
    /// Only compares before incrementing, so an upper corner at
    /// `i32::MAX` cannot overflow.
    fn step(&self, p: GridPoint) -> Option<GridPoint> {
        if p.z < self.bounds.upper.z {
            Some(GridPoint::new(p.x, p.y, p.z + 1))
        } else if p.y < self.bounds.upper.y {
            Some(GridPoint::new(p.x, p.y + 1, self.bounds.lower.z))
        } else if p.x < self.bounds.upper.x {
            Some(GridPoint::new(
                p.x + 1,
                self.bounds.lower.y,
                self.bounds.lower.z,
            ))
        } else {
            None
        }
    }
}

impl Iterator for CubeScan {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        let current = self.cursor?;
        self.cursor = self.step(current);
        Some(current)
    }
}

/// Iterator over exactly the populated points of a grid, x-major.
///
/// Built by sorting a snapshot of the grid's key set, not by filtering
/// a [`CubeScan`]: O(n log n) in the cell count instead of
/// O(bounding-box volume), with an identical yielded sequence.
#[derive(Clone, Debug)]
pub struct PopulatedScan {
    points: std::vec::IntoIter<GridPoint>,
}

impl PopulatedScan {
    pub(crate) fn new(mut points: Vec<GridPoint>) -> Self {
        points.sort_unstable();
        Self {
            points: points.into_iter(),
        }
    }
}

impl Iterator for PopulatedScan {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        self.points.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for PopulatedScan {}

impl DoubleEndedIterator for PopulatedScan {
    fn next_back(&mut self) -> Option<GridPoint> {
        self.points.next_back()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
