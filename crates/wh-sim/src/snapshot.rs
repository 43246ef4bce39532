//! The per-tick output record.

use wh_core::{Cell, Tick};

use crate::Event;

/// Everything an observer needs to know about one completed tick.
///
/// `positions`, `goals`, and `batteries` are indexed by agent; `events` is
/// the ordered transition log for the tick.  Two runs with identical inputs
/// and seed produce identical snapshot sequences.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSnapshot {
    /// Tick count after the step (the first step reports `t = 1`).
    pub t: Tick,

    /// The new configuration.
    pub positions: Vec<Cell>,

    /// The goal vector this tick's planner step consumed.
    pub goals: Vec<Cell>,

    /// Battery level per agent, after this tick's movement cost.
    pub batteries: Vec<u32>,

    /// Ordered transition log.
    pub events: Vec<Event>,
}
