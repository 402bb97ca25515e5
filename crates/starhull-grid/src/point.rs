use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Position of a single cell in the structure grid.
///
/// Signed `i32` coordinates; a ship can extend in any direction from
/// its origin. Points compare lexicographically by (x, y, z), which is
/// exactly the order a [`CubeScan`](crate::CubeScan) visits cells in,
/// so sorting points and scanning the bounding cube agree on order.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPoint {
    /// The origin (0, 0, 0).
    pub const ZERO: GridPoint = GridPoint { x: 0, y: 0, z: 0 };

    /// Creates a new grid point.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a point with all three coordinates set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Returns the point offset by `(dx, dy, dz)`.
    ///
    /// Typically called with unit offsets to address a neighboring
    /// cell (e.g. `(0, 1, 0)` for the cell above).
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Component-wise minimum of `self` and `other`.
    pub fn min(self, other: GridPoint) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Component-wise maximum of `self` and `other`.
    pub fn max(self, other: GridPoint) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for GridPoint {
    fn add_assign(&mut self, rhs: GridPoint) {
        *self = *self + rhs;
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;

    fn sub(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for GridPoint {
    fn sub_assign(&mut self, rhs: GridPoint) {
        *self = *self - rhs;
    }
}

impl Neg for GridPoint {
    type Output = GridPoint;

    fn neg(self) -> GridPoint {
        GridPoint::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for GridPoint {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl From<IVec3> for GridPoint {
    fn from(v: IVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<GridPoint> for IVec3 {
    fn from(p: GridPoint) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_x_major() {
        let mut points = vec![
            GridPoint::new(1, 0, 0),
            GridPoint::new(0, 1, 1),
            GridPoint::new(0, 0, 1),
            GridPoint::new(0, 1, 0),
            GridPoint::new(0, 0, 0),
            GridPoint::new(1, 1, 1),
            GridPoint::new(1, 0, 1),
            GridPoint::new(1, 1, 0),
        ];
        points.sort();

        let expected = [
            GridPoint::new(0, 0, 0),
            GridPoint::new(0, 0, 1),
            GridPoint::new(0, 1, 0),
            GridPoint::new(0, 1, 1),
            GridPoint::new(1, 0, 0),
            GridPoint::new(1, 0, 1),
            GridPoint::new(1, 1, 0),
            GridPoint::new(1, 1, 1),
        ];
        assert_eq!(points, expected);
    }

    #[test]
    fn test_offset_and_ops() {
        let p = GridPoint::new(1, -2, 3);
        assert_eq!(p.offset(0, 1, 0), GridPoint::new(1, -1, 3));
        assert_eq!(p + GridPoint::splat(1), GridPoint::new(2, -1, 4));
        assert_eq!(p - p, GridPoint::ZERO);
        assert_eq!(-p, GridPoint::new(-1, 2, -3));
    }

    #[test]
    fn test_component_min_max() {
        let a = GridPoint::new(-1, 5, 0);
        let b = GridPoint::new(2, -3, 0);
        assert_eq!(a.min(b), GridPoint::new(-1, -3, 0));
        assert_eq!(a.max(b), GridPoint::new(2, 5, 0));
    }

    #[test]
    fn test_ivec3_round_trip() {
        let p = GridPoint::new(7, -8, 9);
        let v: IVec3 = p.into();
        assert_eq!(GridPoint::from(v), p);
    }
}
