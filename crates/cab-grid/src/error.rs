//! Grid-subsystem error type.

use thiserror::Error;

use cab_core::GridPoint;

/// Errors produced by `cab-grid`.
///
/// Every variant is a caller contract violation, not a recoverable runtime
/// condition — callers are expected to pre-validate points against the
/// topology.  Propagate; never mask.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions ({rows}, {cols}) must be positive")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("point {0} is outside the grid")]
    OutOfBounds(GridPoint),

    #[error("points {a} and {b} do not share a cost edge")]
    NotAdjacent { a: GridPoint, b: GridPoint },

    #[error("no path from {from} to {to}")]
    NoPath { from: GridPoint, to: GridPoint },
}

pub type GridResult<T> = Result<T, GridError>;
