//! `cab-core` — foundational types for the cabsim fleet simulation.
//!
//! This crate is a dependency of every other `cab-*` crate.  It intentionally
//! has no `cab-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `CarId`, `PassengerId`                    |
//! | [`point`]   | `GridPoint`, Manhattan distance           |
//! | [`time`]    | `Tick`                                    |
//! | [`rng`]     | `SimRng` (seeded simulation RNG)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CarId, PassengerId};
pub use point::GridPoint;
pub use rng::SimRng;
pub use time::Tick;
