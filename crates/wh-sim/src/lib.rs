//! `wh-sim` — the tick-synchronous warehouse coordinator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`state`]    | `AgentMode`, `GoalKind`, `Claim`, `AgentState`           |
//! | [`event`]    | `Event` — per-tick transition log entries                |
//! | [`snapshot`] | `TickSnapshot` — the per-tick output record              |
//! | [`lifecycle`]| arrival / dwell / acquisition / promotion passes         |
//! | [`sim`]      | `Coordinator` — one tick = one `step()`                  |
//! | [`builder`]  | `CoordinatorBuilder` — validated construction            |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                      |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # The tick
//!
//! A tick is atomic; within it the phases run in a fixed order:
//!
//! 1. Lifecycle events: arrivals, dwell and charge progression, station
//!    claims and queue promotions.
//! 2. Goal vector assembly, with unreachable goals pinned in place.
//! 3. Distance-table refresh for goals that changed.
//! 4. The planner step (collision-free next configuration).
//! 5. Battery decrement for agents that moved; priority update.
//!
//! All randomised choices draw from one RNG stream in a fixed order, so a
//! run is fully determined by its inputs and seed.

pub mod builder;
pub mod error;
pub mod event;
mod lifecycle;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::CoordinatorBuilder;
pub use error::{SimError, SimResult};
pub use event::Event;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Coordinator;
pub use snapshot::TickSnapshot;
pub use state::{AgentMode, AgentState, Claim, GoalKind};
