//! Simulation observer trait for progress reporting and data collection.

use wh_core::Tick;

use crate::TickSnapshot;

/// Callbacks invoked by [`Coordinator::run_ticks`][crate::Coordinator::run_ticks]
/// at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The coordinator never suspends inside
/// a tick — observers always see a fully consistent snapshot.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
///         if snapshot.t.0 % self.interval == 0 {
///             println!("{}: {} events", snapshot.t, snapshot.events.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a tick begins, with the tick counter about to advance.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with the full per-tick output record.
    fn on_tick_end(&mut self, _snapshot: &TickSnapshot) {}

    /// Called once after the final tick of a `run_ticks` call.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
