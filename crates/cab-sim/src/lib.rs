//! `cab-sim` — scenario assembly and the tick loop for the cabsim fleet
//! simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for car in cars (insertion order):          # skip Idle / OutOfEnergy
//!     advance one path step
//!       reached the pick-up point  → board the passenger
//!       consumed the last step     → drop the passenger off
//!       energy exhausted           → apply FAIL_PENALTY, release passenger
//! ```
//!
//! Single-threaded and turn-based by design: cars advance in insertion
//! order, all randomness is drawn from one seeded stream at construction,
//! and the same `ScenarioConfig` always reproduces the same run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cab_grid::GreedyPlanner;
//! use cab_sim::{NoopObserver, ScenarioConfig, Simulation};
//!
//! let mut sim = Simulation::from_config(config, GreedyPlanner)?;
//! sim.dispatch_idle()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use config::ScenarioConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{FAIL_PENALTY, Simulation};
