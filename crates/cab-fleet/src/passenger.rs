//! The passenger record and its lifecycle states.

use std::fmt;

use cab_core::{GridPoint, PassengerId};

/// Lifecycle of a passenger: `WaitPair → WaitPick → PickedUp → Dropped`.
///
/// All transitions are driven by the paired car's operations — the passenger
/// is a passive record.  `Dropped` is terminal; a passenger is never reused
/// afterwards.  The one exception to the forward-only chain is the fleet
/// manager releasing a stranded passenger back to `WaitPair` when its car
/// runs out of energy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerStatus {
    /// Waiting to be paired with a car (initial state).
    WaitPair,
    /// Paired; waiting for the car to reach the pick-up point.
    WaitPick,
    /// On board the paired car.
    PickedUp,
    /// Delivered to the drop-off point (terminal).
    Dropped,
}

impl PassengerStatus {
    /// Stable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            PassengerStatus::WaitPair => "wait_pair",
            PassengerStatus::WaitPick => "wait_pick",
            PassengerStatus::PickedUp => "picked_up",
            PassengerStatus::Dropped  => "dropped",
        }
    }
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trip request: fixed pick-up and drop-off points plus the lifecycle
/// status.  Owned by the fleet manager; cars reference it by id only.
pub struct Passenger {
    id:      PassengerId,
    pickup:  GridPoint,
    dropoff: GridPoint,
    pub(crate) status: PassengerStatus,
}

impl Passenger {
    /// Create a passenger in `WaitPair`.
    ///
    /// The scenario sampler guarantees `dropoff != pickup`; a degenerate
    /// trip would make the drop-off leg empty and the delivery a no-op.
    pub fn new(id: PassengerId, pickup: GridPoint, dropoff: GridPoint) -> Self {
        debug_assert_ne!(pickup, dropoff, "degenerate trip for passenger {id}");
        Self {
            id,
            pickup,
            dropoff,
            status: PassengerStatus::WaitPair,
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn pickup(&self) -> GridPoint {
        self.pickup
    }

    pub fn dropoff(&self) -> GridPoint {
        self.dropoff
    }

    pub fn status(&self) -> PassengerStatus {
        self.status
    }
}
