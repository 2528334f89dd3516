//! Rectangular grid topology: dimensions, boundary/adjacency queries, and
//! per-edge cost weights.
//!
//! # Cost model
//!
//! Weights live in an `FxHashMap` keyed by **ordered** adjacent point pairs.
//! `init_random_costs` draws one weight per edge and writes it under both
//! orderings, so `edge_cost(a, b) == edge_cost(b, a)` holds by construction.
//! The table is write-once per initialization call and read-shared
//! afterwards; the zero-cost variant is a full re-initialization, not a
//! partial mutation.

use rustc_hash::FxHashMap;

use cab_core::{GridPoint, SimRng};

use crate::{GridError, GridResult};

/// A rectangular grid with fixed dimensions and a symmetric edge-cost table.
pub struct Topology {
    rows: i32,
    cols: i32,
    costs: FxHashMap<(GridPoint, GridPoint), u32>,
}

impl Topology {
    /// Create a topology with an empty cost table.
    ///
    /// Call [`init_random_costs`](Self::init_random_costs) or
    /// [`init_zero_costs`](Self::init_zero_costs) before querying
    /// [`edge_cost`](Self::edge_cost).
    pub fn new(rows: i32, cols: i32) -> GridResult<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            costs: FxHashMap::default(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Number of ordered entries in the cost table (2× the edge count once
    /// initialized).
    pub fn cost_entry_count(&self) -> usize {
        self.costs.len()
    }

    // ── Boundary and adjacency queries ────────────────────────────────────

    /// `true` iff `p` lies inside the grid.
    #[inline]
    pub fn is_valid(&self, p: GridPoint) -> bool {
        (0..self.rows).contains(&p.row) && (0..self.cols).contains(&p.col)
    }

    /// `true` iff `p1` and `p2` share a grid edge (Manhattan distance 1).
    ///
    /// Both points must be in bounds; a point equal to itself is not
    /// adjacent to itself.
    pub fn is_adjacent(&self, p1: GridPoint, p2: GridPoint) -> GridResult<bool> {
        self.check_bounds(p1)?;
        self.check_bounds(p2)?;
        Ok(p1.manhattan_distance(p2) == 1)
    }

    fn check_bounds(&self, p: GridPoint) -> GridResult<()> {
        if self.is_valid(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(p))
        }
    }

    // ── Edge costs ────────────────────────────────────────────────────────

    /// Weight of the edge between two adjacent in-bounds points.
    ///
    /// Fails with [`GridError::NotAdjacent`] when the pair has no table
    /// entry — either the points do not share an edge, or the cost table was
    /// queried before initialization.  Both are contract violations.
    pub fn edge_cost(&self, a: GridPoint, b: GridPoint) -> GridResult<u32> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        self.costs
            .get(&(a, b))
            .copied()
            .ok_or(GridError::NotAdjacent { a, b })
    }

    /// Populate every edge with an independent uniform weight in `[0, 9]`.
    ///
    /// Traversal order is fixed so the table is bit-reproducible for a given
    /// RNG stream: row-major over cells, right neighbor before up neighbor.
    /// Each drawn weight is stored under both orderings of the edge.
    pub fn init_random_costs(&mut self, rng: &mut SimRng) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = GridPoint::new(row, col);

                let right = GridPoint::new(row, col + 1);
                if self.is_valid(right) {
                    let w = rng.gen_range(0..=9u32);
                    self.costs.insert((p, right), w);
                    self.costs.insert((right, p), w);
                }

                let up = GridPoint::new(row + 1, col);
                if self.is_valid(up) {
                    let w = rng.gen_range(0..=9u32);
                    self.costs.insert((p, up), w);
                    self.costs.insert((up, p), w);
                }
            }
        }
    }

    /// Overwrite every edge with weight 0.
    ///
    /// Unlike [`init_random_costs`](Self::init_random_costs), each cell
    /// writes only its own forward entry and all four directions are checked
    /// independently; the table ends up symmetric because the neighbor cell
    /// writes the reverse entry on its own visit.
    pub fn init_zero_costs(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = GridPoint::new(row, col);

                let up = GridPoint::new(row + 1, col);
                if self.is_valid(up) {
                    self.costs.insert((p, up), 0);
                }
                let right = GridPoint::new(row, col + 1);
                if self.is_valid(right) {
                    self.costs.insert((p, right), 0);
                }
                let down = GridPoint::new(row - 1, col);
                if self.is_valid(down) {
                    self.costs.insert((p, down), 0);
                }
                let left = GridPoint::new(row, col - 1);
                if self.is_valid(left) {
                    self.costs.insert((p, left), 0);
                }
            }
        }
    }
}
