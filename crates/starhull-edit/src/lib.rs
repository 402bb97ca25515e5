//! Transformation contract for structure-editing routines.
//!
//! An editing routine (smoothing, mirroring, hollowing, ...) is
//! expressed as a [`GridTransform`]: it reads an immutable source
//! [`SparseGrid`] plus routine-specific configuration and produces a
//! brand-new grid of the same value type. The source is never mutated;
//! a routine that prefers in-place editing clones the source first and
//! edits the clone.
//!
//! The routines themselves live with their host applications. This
//! crate only defines the contract and a logging runner.

use thiserror::Error;

use starhull_grid::SparseGrid;

/// Errors an editing routine can report.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The supplied configuration is unusable for this routine.
    #[error("invalid transform configuration: {0}")]
    InvalidConfig(String),
    /// The routine requires at least one populated cell to work on.
    #[error("transform requires a non-empty source grid")]
    EmptySource,
}

/// A structure-editing routine: immutable source in, fresh grid out.
///
/// `T` is the cell value type (e.g. a block descriptor). The contract
/// treats it opaquely; routines put whatever meaning on it they need.
pub trait GridTransform<T> {
    /// Routine-specific configuration passed through by the host.
    type Config;

    /// Short human-readable routine name (e.g. "Smooth").
    fn name(&self) -> &str;

    /// One-line description for host UIs. Optional.
    fn description(&self) -> &str {
        ""
    }

    /// Routine author credit. Optional.
    fn author(&self) -> &str {
        ""
    }

    /// Produces the transformed structure.
    ///
    /// Must not mutate `source`; clone it if in-place edits are more
    /// convenient. Returns a new grid of the same value type.
    fn apply(
        &self,
        source: &SparseGrid<T>,
        config: &Self::Config,
    ) -> Result<SparseGrid<T>, TransformError>;
}

/// Runs a transform against a source grid, logging cell counts before
/// and after.
pub fn run_transform<T, X: GridTransform<T>>(
    transform: &X,
    source: &SparseGrid<T>,
    config: &X::Config,
) -> Result<SparseGrid<T>, TransformError> {
    tracing::debug!(
        "applying transform '{}' to {} cells",
        transform.name(),
        source.len()
    );
    let result = transform.apply(source, config)?;
    tracing::debug!(
        "transform '{}' produced {} cells",
        transform.name(),
        result.len()
    );
    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
