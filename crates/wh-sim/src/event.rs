//! Lifecycle transition events.
//!
//! Events are appended to the tick's log in the order the transitions
//! happen: the arrival pass first, then dwell/charge progression, then
//! queue promotions (loaders, dumps, chargers, in slot order), then goal
//! pinning.  The log order is part of the determinism contract.

use wh_core::{AgentId, Cell};

/// One transition emitted during a tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Agent reached its claimed loader and starts dwelling.
    ArrivedLoader { agent: AgentId, at: Cell, dwell_steps: u32 },

    /// Agent reached its claimed dump and released the slot.
    ArrivedDump { agent: AgentId, at: Cell },

    /// Agent reached its claimed charger and starts charging.
    ArrivedCharger { agent: AgentId, at: Cell },

    /// Loader dwell countdown hit zero.
    DwellFinished { agent: AgentId },

    /// Battery level after one tick of charging.
    Battery { agent: AgentId, value: u32 },

    /// Charging agent resumed work.
    LeaveCharger { agent: AgentId },

    /// Agent was given a loader-bound goal (station cell or staging cell).
    GoalLoader { agent: AgentId, goal: Cell },

    /// Agent was given a dump-bound goal (station cell or staging cell).
    GoalDump { agent: AgentId, goal: Cell },

    /// Agent was given a charger-bound goal (station cell or staging cell).
    GoalCharge { agent: AgentId, goal: Cell },

    /// A queued agent was promoted to holder of a loader slot.
    LoaderClaimed { agent: AgentId, station: Cell },

    /// A queued agent was promoted to holder of a dump slot.
    DumpClaimed { agent: AgentId, station: Cell },

    /// A queued agent was promoted to holder of a charger slot.
    ChargerClaimed { agent: AgentId, station: Cell },

    /// The agent's goal was unreachable from its position; it is pinned at
    /// its current cell until the lifecycle hands it a new goal.
    GoalUnreachable { agent: AgentId, goal: Cell },
}
