//! Sparse 3D grid storage for block-built structures, with bounding-box tracking and deterministic scan orders.

pub mod bounds;
pub mod grid;
pub mod point;
pub mod scan;

pub use bounds::GridBounds;
pub use grid::SparseGrid;
pub use point::GridPoint;
pub use scan::{CubeScan, PopulatedScan};
