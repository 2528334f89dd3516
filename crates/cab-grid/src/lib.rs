//! `cab-grid` — grid topology, edge-cost model, and path planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`topology`] | `Topology` — dimensions, boundary/adjacency, edge costs  |
//! | [`planner`]  | `PathPlanner` trait + `GreedyPlanner`                    |
//! | [`error`]    | `GridError`, `GridResult<T>`                             |
//!
//! # Path model
//!
//! The planner produces concrete single-step sequences, one grid cell per
//! step.  The default [`GreedyPlanner`] is a coordinate-descent walk on the
//! Manhattan distance to the target — it ignores edge weights entirely.  The
//! cost table exists for external accounting (reward models score a route by
//! the weights of the edges it crossed), not for route selection.

pub mod error;
pub mod planner;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use planner::{GreedyPlanner, PathPlanner};
pub use topology::Topology;
