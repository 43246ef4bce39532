//! The `OutputWriter` trait implemented by all backend writers.

use wh_sim::TickSnapshot;

use crate::OutputResult;

/// Trait implemented by the CSV and visualizer-trace writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Record one completed tick.
    fn write_tick(&mut self, snapshot: &TickSnapshot) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
