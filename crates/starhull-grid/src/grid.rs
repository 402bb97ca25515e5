//! Sparse storage for voxel structures, keyed by [`GridPoint`].
//!
//! The [`SparseGrid`] maps integer cell positions to values with a
//! single flat [`FxHashMap`](rustc_hash::FxHashMap), giving O(1)
//! lookup, insert, and removal with fast hashing of small fixed-size
//! keys. Absence of a key means the cell is empty; the grid never
//! stores a placeholder for an empty cell.

use rustc_hash::FxHashMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::bounds::GridBounds;
use crate::point::GridPoint;
use crate::scan::{CubeScan, PopulatedScan};

/// Sparse mapping from [`GridPoint`] to values of type `T`.
///
/// Models a structure built of discrete blocks (a ship hull, a
/// station) where most of the addressable space is empty. Every
/// stored key holds a real value; emptiness is expressed by the key
/// not being present, and queries for never-seen positions return
/// `None` rather than failing.
///
/// The grid treats `T` opaquely. It never inspects values beyond
/// moving and cloning them.
#[derive(Clone, Debug)]
pub struct SparseGrid<T> {
    cells: FxHashMap<GridPoint, T>,
}

impl<T> SparseGrid<T> {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    /// Stores `value` at `point`, replacing and returning any previous
    /// value there.
    pub fn insert(&mut self, point: GridPoint, value: T) -> Option<T> {
        self.cells.insert(point, value)
    }

    /// Removes and returns the value at `point`.
    ///
    /// Returns `None` if the cell was already empty.
    pub fn remove(&mut self, point: GridPoint) -> Option<T> {
        self.cells.remove(&point)
    }

    /// Stores or clears the cell at `point` in one call.
    ///
    /// `Some(v)` behaves like [`insert`](Self::insert); `None` behaves
    /// like [`remove`](Self::remove). Setting an empty cell to `None`
    /// is a no-op, so the call is idempotent either way.
    pub fn set(&mut self, point: GridPoint, value: Option<T>) {
        match value {
            Some(v) => {
                self.cells.insert(point, v);
            }
            None => {
                self.cells.remove(&point);
            }
        }
    }

    /// Immutable access to the value at `point`, if any.
    pub fn get(&self, point: GridPoint) -> Option<&T> {
        self.cells.get(&point)
    }

    /// Mutable access to the value at `point`, if any.
    pub fn get_mut(&mut self, point: GridPoint) -> Option<&mut T> {
        self.cells.get_mut(&point)
    }

    /// Returns true if the cell at `point` holds a value.
    pub fn contains(&self, point: GridPoint) -> bool {
        self.get(point).is_some()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Tight bounding box of the populated cells, or `None` if the
    /// grid is empty.
    ///
    /// Each axis bound is achieved by at least one populated cell, but
    /// lower and upper need not come from the same cell. Recomputed
    /// from scratch on every call.
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut points = self.cells.keys();
        let mut bounds = GridBounds::from_point(*points.next()?);
        for p in points {
            bounds.include(*p);
        }
        Some(bounds)
    }

    /// Scans every point of the current bounding box, populated or
    /// not, in x-major order.
    ///
    /// Bounds are computed fresh at the call, so each scan starts over
    /// from the grid's current extent. An empty grid yields an empty
    /// scan. Step count is the box volume; for sparse, widely
    /// separated cells prefer [`populated_scan`](Self::populated_scan).
    pub fn cube_scan(&self) -> CubeScan {
        match self.bounds() {
            Some(bounds) => bounds.scan(),
            None => CubeScan::exhausted(),
        }
    }

    /// Scans exactly the populated points, in the same x-major order
    /// as [`cube_scan`](Self::cube_scan).
    ///
    /// The point list is snapshotted and sorted at the call, so the
    /// scan stays valid (reflecting construction-time state) even if
    /// the grid is mutated while it is live.
    pub fn populated_scan(&self) -> PopulatedScan {
        PopulatedScan::new(self.cells.keys().copied().collect())
    }

    /// Iterates over all populated `(point, value)` pairs in
    /// unspecified order.
    ///
    /// Faster than [`populated_scan`](Self::populated_scan) plus
    /// per-point lookup when traversal order does not matter.
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, &T)> {
        self.cells.iter().map(|(p, v)| (*p, v))
    }

    /// Mutable iteration over all populated `(point, value)` pairs in
    /// unspecified order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GridPoint, &mut T)> {
        self.cells.iter_mut().map(|(p, v)| (*p, v))
    }
}

impl<T: Clone> SparseGrid<T> {
    /// Copies every populated cell of `other` into this grid.
    ///
    /// On collision the value from `other` wins; cells of this grid
    /// with no counterpart in `other` are left untouched.
    pub fn merge(&mut self, other: &SparseGrid<T>) {
        for (point, value) in other.iter() {
            self.cells.insert(point, value.clone());
        }
    }

    /// Replaces the entire contents of this grid with a copy of
    /// `other`.
    pub fn assign(&mut self, other: &SparseGrid<T>) {
        self.clear();
        self.merge(other);
    }
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(GridPoint, T)> for SparseGrid<T> {
    fn from_iter<I: IntoIterator<Item = (GridPoint, T)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(GridPoint, T)> for SparseGrid<T> {
    fn extend<I: IntoIterator<Item = (GridPoint, T)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

/// Serialized as a sequence of `(point, value)` pairs in x-major scan
/// order, so output is deterministic and formats like JSON (which
/// cannot represent non-string map keys) work unchanged.
impl<T: Serialize> Serialize for SparseGrid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pairs: Vec<(GridPoint, &T)> = self.cells.iter().map(|(p, v)| (*p, v)).collect();
        pairs.sort_unstable_by_key(|(p, _)| *p);
        serializer.collect_seq(pairs)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SparseGrid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(GridPoint, T)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
