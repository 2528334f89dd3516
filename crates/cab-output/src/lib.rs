//! `cab-output` — simulation output writers for the cabsim fleet simulation.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                 | One row per                         |
//! |----------------------|-------------------------------------|
//! | `car_snapshots.csv`  | car per snapshot tick               |
//! | `tick_summaries.csv` | tick                                |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `cab_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cab_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CarSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
