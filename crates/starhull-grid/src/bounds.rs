use serde::{Deserialize, Serialize};

use crate::point::GridPoint;
use crate::scan::CubeScan;

/// Inclusive axis-aligned bounding box over grid points.
///
/// Invariant: lower.x <= upper.x, lower.y <= upper.y, lower.z <= upper.z.
/// The constructor enforces this by sorting components. Both corners
/// are part of the box, so a single-cell structure has lower == upper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridBounds {
    pub lower: GridPoint,
    pub upper: GridPoint,
}

impl GridBounds {
    /// Creates bounds from two corners. Automatically sorts components
    /// so that lower <= upper on every axis.
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    /// Creates degenerate bounds covering exactly one point.
    ///
    /// Used to seed a running min/max fold before widening with
    /// [`include`](Self::include).
    pub fn from_point(p: GridPoint) -> Self {
        Self { lower: p, upper: p }
    }

    /// Widens the bounds just enough to cover `p`.
    ///
    /// Each axis is adjusted independently, so lower and upper need
    /// not both come from the same point.
    pub fn include(&mut self, p: GridPoint) {
        self.lower = self.lower.min(p);
        self.upper = self.upper.max(p);
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.lower.x
            && p.x <= self.upper.x
            && p.y >= self.lower.y
            && p.y <= self.upper.y
            && p.z >= self.lower.z
            && p.z <= self.upper.z
    }

    /// Returns the smallest bounds enclosing both self and other.
    pub fn union(&self, other: &GridBounds) -> GridBounds {
        GridBounds {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    /// Side lengths in cells along each axis (always >= 1, since the
    /// bounds are inclusive).
    pub fn extent(&self) -> (u64, u64, u64) {
        (
            (i64::from(self.upper.x) - i64::from(self.lower.x) + 1) as u64,
            (i64::from(self.upper.y) - i64::from(self.lower.y) + 1) as u64,
            (i64::from(self.upper.z) - i64::from(self.lower.z) + 1) as u64,
        )
    }

    /// Number of cells in the box.
    ///
    /// Computed in u128: each side can span the full i32 range (up to
    /// 2³²), so the product can exceed u64.
    pub fn volume(&self) -> u128 {
        let (dx, dy, dz) = self.extent();
        u128::from(dx) * u128::from(dy) * u128::from(dz)
    }

    /// Iterates over every point in the box, populated or not, in
    /// x-major order: x outermost, then y, then z, each ascending.
    pub fn scan(&self) -> CubeScan {
        CubeScan::new(*self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_corners() {
        let b = GridBounds::new(GridPoint::new(5, -1, 3), GridPoint::new(-2, 4, 3));
        assert_eq!(b.lower, GridPoint::new(-2, -1, 3));
        assert_eq!(b.upper, GridPoint::new(5, 4, 3));
    }

    #[test]
    fn test_include_widens_per_axis() {
        let mut b = GridBounds::from_point(GridPoint::new(1, 1, 1));
        b.include(GridPoint::new(-3, 1, 1));
        b.include(GridPoint::new(1, 1, 9));
        // lower.x comes from one point, upper.z from another.
        assert_eq!(b.lower, GridPoint::new(-3, 1, 1));
        assert_eq!(b.upper, GridPoint::new(1, 1, 9));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = GridBounds::new(GridPoint::ZERO, GridPoint::splat(2));
        assert!(b.contains(GridPoint::ZERO));
        assert!(b.contains(GridPoint::splat(2)));
        assert!(b.contains(GridPoint::new(1, 2, 0)));
        assert!(!b.contains(GridPoint::new(3, 0, 0)));
        assert!(!b.contains(GridPoint::new(0, -1, 0)));
    }

    #[test]
    fn test_union() {
        let a = GridBounds::new(GridPoint::ZERO, GridPoint::splat(1));
        let b = GridBounds::new(GridPoint::splat(-2), GridPoint::new(0, 0, 5));
        let u = a.union(&b);
        assert_eq!(u.lower, GridPoint::splat(-2));
        assert_eq!(u.upper, GridPoint::new(1, 1, 5));
    }

    #[test]
    fn test_extent_and_volume() {
        let b = GridBounds::new(GridPoint::new(-1, 0, 0), GridPoint::new(1, 0, 4));
        assert_eq!(b.extent(), (3, 1, 5));
        assert_eq!(b.volume(), 15);

        let single = GridBounds::from_point(GridPoint::splat(7));
        assert_eq!(single.volume(), 1);
    }

    #[test]
    fn test_volume_spanning_full_i32_range() {
        let b = GridBounds::new(GridPoint::splat(i32::MIN), GridPoint::splat(i32::MAX));
        assert_eq!(b.volume(), (1u128 << 32).pow(3));
    }
}
