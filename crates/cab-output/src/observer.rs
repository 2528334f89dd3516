//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cab_core::{PassengerId, Tick};
use cab_fleet::{Car, Passenger};
use cab_sim::SimObserver;

use crate::row::{CarSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes car snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, moved: usize) {
        let row = TickSummaryRow {
            tick:       tick.0,
            moved_cars: moved as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[Car], _passengers: &[Passenger]) {
        let rows: Vec<CarSnapshotRow> = cars
            .iter()
            .map(|car| CarSnapshotRow {
                car_id:          car.id().0,
                tick:            tick.0,
                row:             car.position().row,
                col:             car.position().col,
                status:          car.status().as_str(),
                passenger_id:    car.passenger().unwrap_or(PassengerId::INVALID).0,
                energy:          car.energy(),
                travel_distance: car.travel_distance(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
