//! `OccupancyView` — the planner's two cell→agent scratch maps.
//!
//! Two dense `H×W` arrays of agent indices:
//!
//! - `now[c]` — the agent at cell `c` in the current tick.
//! - `nxt[c]` — the agent tentatively assigned cell `c` for the next tick.
//!
//! Both default to [`AgentId::INVALID`] and are cleared at the touched cells
//! at the end of every planner step, so the buffers can be allocated once at
//! coordinator construction and reused for the whole run.

use wh_core::{AgentId, Cell};

/// Dense current/next occupancy scratch buffers.
pub struct OccupancyView {
    width: u16,
    now:   Vec<AgentId>,
    nxt:   Vec<AgentId>,
}

impl OccupancyView {
    /// Allocate both buffers for a `height × width` grid, all entries clear.
    pub fn new(height: u16, width: u16) -> Self {
        let cells = height as usize * width as usize;
        Self {
            width,
            now: vec![AgentId::INVALID; cells],
            nxt: vec![AgentId::INVALID; cells],
        }
    }

    // ── Current tick ──────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self, c: Cell) -> AgentId {
        self.now[c.index(self.width)]
    }

    #[inline]
    pub fn mark_now(&mut self, c: Cell, agent: AgentId) {
        self.now[c.index(self.width)] = agent;
    }

    #[inline]
    pub fn clear_now(&mut self, c: Cell) {
        self.now[c.index(self.width)] = AgentId::INVALID;
    }

    // ── Next tick ─────────────────────────────────────────────────────────

    #[inline]
    pub fn nxt(&self, c: Cell) -> AgentId {
        self.nxt[c.index(self.width)]
    }

    #[inline]
    pub fn mark_nxt(&mut self, c: Cell, agent: AgentId) {
        self.nxt[c.index(self.width)] = agent;
    }

    #[inline]
    pub fn clear_nxt(&mut self, c: Cell) {
        self.nxt[c.index(self.width)] = AgentId::INVALID;
    }

    // ── Invariant check ───────────────────────────────────────────────────

    /// `true` if every entry of both buffers is clear.  O(H·W) — intended
    /// for debug assertions and tests, not the hot path.
    pub fn is_clear(&self) -> bool {
        self.now.iter().chain(self.nxt.iter()).all(|&a| a == AgentId::INVALID)
    }
}
