//! Per-agent lifecycle state.

use wh_core::{Cell, SlotId};
use wh_station::StationKind;

/// Where an agent is in its task cycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentMode {
    /// Heading to a claimed loader slot.
    ToLoad,
    /// Dwelling on a loader while the pickup completes.
    AtLoadWait,
    /// Heading to a claimed dump slot.
    ToDump,
    /// Heading to a claimed charger slot.
    ToCharge,
    /// Parked on a charger, gaining charge each tick.
    Charging,
    /// Parked on (or heading to) a staging cell while queued for a slot.
    Staging,
    /// Parked outside the task cycle.  The coordinator never enters this
    /// mode on its own; it exists for hosts that sideline an agent.
    Stay,
}

/// Redundant goal label consumed by the scheduler when assembling the goal
/// vector — `Stay` pins the agent to its current cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalKind {
    Load,
    Dump,
    Charge,
    Staging,
    Stay,
}

/// The station slot an agent currently holds the exclusive right to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Claim {
    pub kind: StationKind,
    pub slot: SlotId,
}

/// Full lifecycle state for one agent.
///
/// Invariants upheld by the coordinator:
///
/// - `claim` is `Some` exactly when `mode` is `ToLoad`, `AtLoadWait`,
///   `ToDump`, `ToCharge`, or `Charging`;
/// - `dwell` is nonzero only in `AtLoadWait` (loaders) — charging duration
///   is governed by the battery level, not a countdown;
/// - `staging` is `Some` exactly while the agent has a reserved staging
///   cell, i.e. in `Staging` mode with a successful reservation.
#[derive(Clone, Debug)]
pub struct AgentState {
    pub mode:      AgentMode,
    pub goal_kind: GoalKind,
    pub goal:      Cell,
    pub battery:   u32,
    pub dwell:     u32,
    pub claim:     Option<Claim>,
    pub staging:   Option<Cell>,
}

impl AgentState {
    /// Fresh pre-assignment state with a full battery.
    pub fn new(battery_max: u32) -> Self {
        Self {
            mode:      AgentMode::ToLoad,
            goal_kind: GoalKind::Load,
            goal:      Cell::NONE,
            battery:   battery_max,
            dwell:     0,
            claim:     None,
            staging:   None,
        }
    }
}
