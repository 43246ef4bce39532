//! `wh-station` — station slots, exclusive claims, and FIFO waiting queues.
//!
//! A warehouse has three independent station pools: loaders, dumps, and
//! chargers.  Each pool is a [`StationSet`]; each slot in a set has at most
//! one *holder* (the agent with the exclusive right to arrive and occupy the
//! cell) and a FIFO queue of waiting agents.
//!
//! The coordinator is the only mutator.  Invariants it must uphold:
//!
//! - an agent holds at most one slot across ALL station sets;
//! - an agent waits in at most one queue per set;
//! - a queued agent is never the holder of that slot.

pub mod set;

#[cfg(test)]
mod tests;

pub use set::{StationKind, StationSet};
