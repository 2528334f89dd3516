//! `cab-fleet` — car and passenger entities and their lifecycle machines.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`car`]       | `Car`, `CarStatus`, `MoveOutcome`                     |
//! | [`passenger`] | `Passenger`, `PassengerStatus`                        |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                        |
//!
//! # Coupled state machines
//!
//! The two lifecycles advance in lockstep, driven only by car operations:
//!
//! ```text
//! Car:       Idle ──pair──▶ PickingUp ──pick──▶ DroppingOff ──drop──▶ Idle
//! Passenger: WaitPair ────▶ WaitPick  ────────▶ PickedUp    ───────▶ Dropped
//! ```
//!
//! A car that runs out of energy mid-delivery enters the absorbing
//! `OutOfEnergy` state; the fleet manager then releases the stranded
//! passenger back to `WaitPair`.  The car holds its passenger by
//! [`PassengerId`][cab_core::PassengerId] only — ownership of the passenger
//! record stays with the fleet manager, which passes `&mut Passenger` into
//! each transition call.

pub mod car;
pub mod error;
pub mod passenger;


pub use car::{Car, CarStatus, MoveOutcome};
pub use error::{FleetError, FleetResult};
pub use passenger::{Passenger, PassengerStatus};
