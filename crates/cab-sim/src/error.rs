//! Simulation-level error type.

use thiserror::Error;

use cab_core::{CarId, PassengerId};
use cab_fleet::FleetError;
use cab_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} count {count} exceeds the {cells} cells on the grid")]
    CountExceedsCells {
        what:  &'static str,
        count: usize,
        cells: usize,
    },

    #[error("car {0} not found")]
    UnknownCar(CarId),

    #[error("passenger {0} not found")]
    UnknownPassenger(PassengerId),

    /// A busy car with no paired passenger — a broken internal invariant,
    /// surfaced rather than skipped.
    #[error("car {0} is busy but has no paired passenger")]
    MissingPassenger(CarId),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
