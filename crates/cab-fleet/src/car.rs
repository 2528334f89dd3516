//! The car entity: position, energy budget, assigned path, and the lifecycle
//! state machine that drives its paired passenger's transitions.

use std::collections::VecDeque;
use std::fmt;

use cab_core::{CarId, GridPoint, PassengerId};

use crate::error::{FleetError, FleetResult};
use crate::passenger::{Passenger, PassengerStatus};

/// Lifecycle of a car: `Idle → PickingUp → DroppingOff → Idle`, repeatable.
///
/// `OutOfEnergy` is absorbing — it is reached from either busy state when
/// the energy budget hits zero, and no further moves are permitted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarStatus {
    /// No passenger, no path (initial state).
    Idle,
    /// Paired; driving the first path leg toward the pick-up point.
    PickingUp,
    /// Passenger on board; driving the second leg toward the drop-off point.
    DroppingOff,
    /// Energy exhausted mid-delivery (terminal).
    OutOfEnergy,
}

impl CarStatus {
    /// Stable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            CarStatus::Idle        => "idle",
            CarStatus::PickingUp   => "picking_up",
            CarStatus::DroppingOff => "dropping_off",
            CarStatus::OutOfEnergy => "out_of_energy",
        }
    }

    /// `true` for the two busy states that consume path steps each tick.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, CarStatus::PickingUp | CarStatus::DroppingOff)
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of a successful [`Car::advance`] call.
///
/// Energy depletion is a first-class simulation state, not an error: the
/// fleet manager reads `Exhausted` to apply its failure penalty and release
/// the stranded passenger.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// One path step was consumed; position and energy were updated.
    Advanced,
    /// The energy budget was already zero; the car is now `OutOfEnergy` and
    /// nothing else was mutated.
    Exhausted,
}

/// A vehicle with a finite energy budget.
///
/// Invariant: `status == Idle` ⇔ `passenger == None` ⇔ the path is empty —
/// except strictly between [`pair_with`](Self::pair_with) and the
/// [`assign_path`](Self::assign_path) call that must follow it before the
/// next tick.
pub struct Car {
    id:              CarId,
    position:        GridPoint,
    energy:          u32,
    status:          CarStatus,
    passenger:       Option<PassengerId>,
    path:            VecDeque<GridPoint>,
    /// Steps left on the pick-up leg; 0 once the car stands on the pick-up
    /// point.  Only meaningful after `assign_path`.
    pickup_steps:    usize,
    travel_distance: u64,
}

impl Car {
    /// Create an idle car at `position` with the given energy budget.
    pub fn new(id: CarId, position: GridPoint, energy: u32) -> Self {
        Self {
            id,
            position,
            energy,
            status:          CarStatus::Idle,
            passenger:       None,
            path:            VecDeque::new(),
            pickup_steps:    0,
            travel_distance: 0,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn status(&self) -> CarStatus {
        self.status
    }

    /// The currently paired passenger, if any.  Non-owning: the id indexes
    /// the fleet manager's passenger vector.
    pub fn passenger(&self) -> Option<PassengerId> {
        self.passenger
    }

    /// Completed moves over the car's lifetime.
    pub fn travel_distance(&self) -> u64 {
        self.travel_distance
    }

    /// Path steps not yet consumed.
    pub fn remaining_steps(&self) -> usize {
        self.path.len()
    }

    /// `true` once a car driving toward its passenger stands on the pick-up
    /// point — the fleet manager's cue to call [`pick_up`](Self::pick_up).
    pub fn reached_pickup(&self) -> bool {
        self.status == CarStatus::PickingUp && self.pickup_steps == 0
    }

    // ── Lifecycle transitions ─────────────────────────────────────────────

    /// Pair with a waiting passenger: passenger → `WaitPick`, car →
    /// `PickingUp`.  Assigns no path — the manager must follow up with
    /// [`assign_path`](Self::assign_path) before the next tick.
    pub fn pair_with(&mut self, passenger: &mut Passenger) -> FleetResult<()> {
        if self.passenger.is_some() {
            return Err(FleetError::AlreadyPaired(self.id));
        }
        if self.status != CarStatus::Idle {
            return Err(FleetError::InvalidState {
                car:    self.id,
                status: self.status,
                action: "pair",
            });
        }
        if passenger.status != PassengerStatus::WaitPair {
            return Err(FleetError::PassengerUnavailable {
                passenger: passenger.id(),
                status:    passenger.status,
            });
        }

        passenger.status = PassengerStatus::WaitPick;
        self.passenger = Some(passenger.id());
        self.status = CarStatus::PickingUp;
        Ok(())
    }

    /// Load the two path legs: pick-up leg first, drop-off leg second.
    /// Status is unchanged.
    pub fn assign_path(&mut self, to_pickup: Vec<GridPoint>, to_dropoff: Vec<GridPoint>) {
        self.pickup_steps = to_pickup.len();
        self.path = to_pickup.into_iter().chain(to_dropoff).collect();
    }

    /// Board the paired passenger: passenger → `PickedUp`, car →
    /// `DroppingOff`.
    pub fn pick_up(&mut self, passenger: &mut Passenger) -> FleetResult<()> {
        if self.status != CarStatus::PickingUp {
            return Err(FleetError::InvalidState {
                car:    self.id,
                status: self.status,
                action: "pick up",
            });
        }
        self.check_paired(passenger)?;

        passenger.status = PassengerStatus::PickedUp;
        self.status = CarStatus::DroppingOff;
        Ok(())
    }

    /// Deliver the paired passenger: passenger → `Dropped` (terminal), the
    /// reference is cleared, car → `Idle`.
    pub fn drop_off(&mut self, passenger: &mut Passenger) -> FleetResult<()> {
        if self.status != CarStatus::DroppingOff {
            return Err(FleetError::InvalidState {
                car:    self.id,
                status: self.status,
                action: "drop off",
            });
        }
        self.check_paired(passenger)?;

        passenger.status = PassengerStatus::Dropped;
        self.passenger = None;
        self.status = CarStatus::Idle;
        Ok(())
    }

    /// Consume one path step.
    ///
    /// Requires a busy status — moving an idle or exhausted car is a
    /// contract violation.  With no energy left the car flips to
    /// `OutOfEnergy` and returns [`MoveOutcome::Exhausted`] without touching
    /// position, path, or travel distance.  An empty path while busy is the
    /// manager's contract violation ([`FleetError::EmptyPath`]) and mutates
    /// nothing.
    pub fn advance(&mut self) -> FleetResult<MoveOutcome> {
        if !self.status.is_active() {
            return Err(FleetError::InvalidState {
                car:    self.id,
                status: self.status,
                action: "move",
            });
        }

        if self.energy == 0 {
            self.status = CarStatus::OutOfEnergy;
            return Ok(MoveOutcome::Exhausted);
        }

        let next = self.path.pop_front().ok_or(FleetError::EmptyPath(self.id))?;
        self.energy -= 1;
        self.position = next;
        if self.pickup_steps > 0 {
            self.pickup_steps -= 1;
        }
        self.travel_distance += 1;
        Ok(MoveOutcome::Advanced)
    }

    /// Release the passenger stranded by this car's energy exhaustion back
    /// to `WaitPair`, clearing the reference.  The car's frozen position and
    /// path are left untouched for post-mortem metrics.
    pub fn release_stranded(&mut self, passenger: &mut Passenger) -> FleetResult<()> {
        if self.status != CarStatus::OutOfEnergy {
            return Err(FleetError::InvalidState {
                car:    self.id,
                status: self.status,
                action: "release",
            });
        }
        self.check_paired(passenger)?;

        passenger.status = PassengerStatus::WaitPair;
        self.passenger = None;
        Ok(())
    }

    fn check_paired(&self, passenger: &Passenger) -> FleetResult<()> {
        match self.passenger {
            Some(id) if id == passenger.id() => Ok(()),
            expected => Err(FleetError::PassengerMismatch {
                car: self.id,
                expected,
                got: passenger.id(),
            }),
        }
    }
}
