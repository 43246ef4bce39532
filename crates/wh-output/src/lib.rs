//! `wh-output` — run recorders for the rust_wh framework.
//!
//! Two backends are provided:
//!
//! | Backend            | Files created                     |
//! |--------------------|-----------------------------------|
//! | [`CsvWriter`]      | `events.csv`, `positions.csv`     |
//! | [`VisualizerWriter`] | one `t:(x,y),(x,y),…` trace file |
//!
//! Both implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `wh_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wh_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! coordinator.run_ticks(1_000, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod visualizer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use visualizer::VisualizerWriter;
pub use writer::OutputWriter;
