//! `wh-pibt` — the single-tick collision-free configuration planner.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`occupancy`] | `OccupancyView` — current/next cell→agent scratch maps |
//! | [`planner`]   | `Pibt` — priority-inheritance step over one tick       |
//!
//! # Design notes
//!
//! The planner is stateless between ticks apart from its scratch buffers,
//! which are allocated once and cleared at the touched cells after every
//! step.  It never fails: an agent with no viable move stays in place, which
//! is the designed fallback rather than an error.

pub mod occupancy;
pub mod planner;


pub use occupancy::OccupancyView;
pub use planner::Pibt;
