//! Path-planning trait and the default greedy planner.
//!
//! # Pluggability
//!
//! `cab-sim` plans routes via the [`PathPlanner`] trait, so applications can
//! swap in custom strategies (weighted shortest path, congestion avoidance)
//! without touching the simulation core.  The default [`GreedyPlanner`] is
//! sufficient for an unobstructed rectangular grid.

use cab_core::GridPoint;

use crate::topology::Topology;
use crate::{GridError, GridResult};

/// Pluggable point-to-point planner.
pub trait PathPlanner {
    /// Compute the step sequence from `start` to `end`.
    ///
    /// The result is the open-start/closed-end sequence `(start, end]`: it
    /// excludes `start`, includes `end`, and is empty when `start == end`.
    /// Both endpoints must be in bounds.
    fn plan(&self, topo: &Topology, start: GridPoint, end: GridPoint)
        -> GridResult<Vec<GridPoint>>;
}

/// Greedy steepest-descent walk on Manhattan distance to the target.
///
/// At each step the four neighbors are scanned in the fixed order up, down,
/// left, right; out-of-bounds candidates are discarded, and a candidate wins
/// only when strictly closer to the target than the best seen so far —
/// strict `<` means the first candidate in scan order keeps ties.
///
/// Edge weights are ignored entirely: this is coordinate descent, not
/// Dijkstra.  On a full rectangular grid with no obstacles an improving
/// neighbor always exists, every step decreases the remaining Manhattan
/// distance by exactly one, and the walk reaches the target in exactly
/// `manhattan_distance(start, end)` steps.
pub struct GreedyPlanner;

impl PathPlanner for GreedyPlanner {
    fn plan(
        &self,
        topo: &Topology,
        start: GridPoint,
        end: GridPoint,
    ) -> GridResult<Vec<GridPoint>> {
        if !topo.is_valid(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !topo.is_valid(end) {
            return Err(GridError::OutOfBounds(end));
        }

        let mut path = Vec::with_capacity(start.manhattan_distance(end) as usize);
        let mut current = start;

        while current != end {
            let mut best_dist = u32::MAX;
            let mut best = None;

            for candidate in current.neighbors() {
                if !topo.is_valid(candidate) {
                    continue;
                }
                let dist = candidate.manhattan_distance(end);
                if dist < best_dist {
                    best_dist = dist;
                    best = Some(candidate);
                }
            }

            // Unreachable on a valid open grid; surfaced rather than masked.
            let next = best.ok_or(GridError::NoPath { from: start, to: end })?;
            path.push(next);
            current = next;
        }

        Ok(path)
    }
}
