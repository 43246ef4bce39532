//! `wh-core` — foundational types for the `rust_wh` warehouse coordination
//! framework.
//!
//! This crate is a dependency of every other `wh-*` crate.  It intentionally
//! has no `wh-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `SlotId`                                   |
//! | [`cell`]   | `Cell` grid coordinate and its `NONE` sentinel        |
//! | [`time`]   | `Tick` counter                                        |
//! | [`config`] | `SimConfig`, `ResumePolicy`                           |
//! | [`rng`]    | `SimRng` — the single deterministic stream            |
//! | [`error`]  | `ConfigError`                                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{ResumePolicy, SimConfig};
pub use error::ConfigError;
pub use ids::{AgentId, SlotId};
pub use rng::SimRng;
pub use time::Tick;
