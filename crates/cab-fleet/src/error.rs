//! Fleet-subsystem error type.
//!
//! Every variant is a contract violation: an operation was invoked on an
//! entity whose state does not permit it.  None are retried or recovered —
//! masking an invalid transition would break reproducibility.

use thiserror::Error;

use cab_core::{CarId, PassengerId};

use crate::car::CarStatus;
use crate::passenger::PassengerStatus;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("car {0} is already paired with a passenger")]
    AlreadyPaired(CarId),

    #[error("car {car} cannot {action} while {status}")]
    InvalidState {
        car:    CarId,
        status: CarStatus,
        action: &'static str,
    },

    #[error("car {0} has no remaining path steps")]
    EmptyPath(CarId),

    #[error("passenger {got} is not the one paired with car {car} (expected {expected:?})")]
    PassengerMismatch {
        car:      CarId,
        expected: Option<PassengerId>,
        got:      PassengerId,
    },

    #[error("passenger {passenger} is not waiting to be paired (currently {status})")]
    PassengerUnavailable {
        passenger: PassengerId,
        status:    PassengerStatus,
    },
}

pub type FleetResult<T> = Result<T, FleetError>;
