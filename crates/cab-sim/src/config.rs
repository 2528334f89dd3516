//! Scenario configuration.

/// Top-level scenario configuration.
///
/// Typically hard-coded by demo binaries or loaded from a config file by the
/// application crate, then passed to
/// [`Simulation::from_config`][crate::Simulation::from_config].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Master RNG seed.  The same seed always produces an identical scenario.
    pub seed: u64,

    /// Grid rows.  Must be positive.
    pub rows: i32,

    /// Grid columns.  Must be positive.
    pub cols: i32,

    /// Cars to place, each on its own distinct cell.  At most `rows * cols`.
    pub num_cars: usize,

    /// Passengers to place, with distinct pick-up cells.  At most
    /// `rows * cols`.
    pub num_passengers: usize,

    /// Total ticks driven by [`Simulation::run`][crate::Simulation::run].
    pub total_ticks: u64,

    /// Snapshot observer cadence in ticks.  1 = every tick; 0 disables
    /// snapshots.
    pub snapshot_interval_ticks: u64,
}

impl ScenarioConfig {
    /// Total number of cells on the configured grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows.max(0) as usize * self.cols.max(0) as usize
    }

    /// Upper bound (inclusive) for a car's initial energy: the maximum
    /// Manhattan span of the grid, `rows + cols - 2`.
    #[inline]
    pub fn max_energy(&self) -> u32 {
        (self.rows + self.cols - 2).max(0) as u32
    }
}
