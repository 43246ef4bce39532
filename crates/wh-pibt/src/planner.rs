//! Priority inheritance with backtracking — one collision-free step.
//!
//! # Procedure
//!
//! Given the current configuration, one distance table per agent (keyed on
//! that agent's goal), and a priority vector, `step` produces the next
//! configuration such that:
//!
//! 1. no two agents share a cell (vertex safety),
//! 2. no two agents swap cells (edge safety),
//! 3. every agent stays or moves to a 4-connected neighbor (locality),
//! 4. the result is a pure function of the inputs and the RNG state.
//!
//! Agents are decided in descending priority order (ties broken by index).
//! When a high-priority agent wants a cell currently occupied by an
//! undecided agent, it tentatively claims the cell and recurses into the
//! occupant — the occupant inherits the urgency and must vacate or the
//! claim is rolled back.  Recursion depth is bounded by the number of
//! agents, since each agent is decided at most once per step.
//!
//! # Rollback
//!
//! When the recursive call fails, the failing occupant has already claimed
//! its own cell back (the give-up path), so the caller's tentative
//! `occupied_nxt` entry has usually been overwritten; the caller clears it
//! only if it still owns it, resets its own slot in the next configuration,
//! and tries its next candidate.  This keeps both buffers consistent with
//! the final configuration at all times.

use wh_core::{AgentId, Cell, SimRng};
use wh_grid::{DistTable, Grid};

use crate::OccupancyView;

/// The planner.  Owns the occupancy scratch buffers; borrows everything else
/// for the duration of one [`step`](Pibt::step).
pub struct Pibt {
    occupancy: OccupancyView,
    /// Scratch agent ordering, reused across ticks.
    order: Vec<u32>,
}

impl Pibt {
    /// Allocate scratch buffers for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            occupancy: OccupancyView::new(grid.height(), grid.width()),
            order:     Vec::new(),
        }
    }

    /// Compute the next configuration for one tick.
    ///
    /// `tables[i]` must be the distance table whose source is agent `i`'s
    /// goal; an agent pinned in place simply gets the table of its own cell.
    /// All slices must have equal length.
    ///
    /// The occupancy buffers are fully cleared (at the touched cells) before
    /// returning.
    pub fn step(
        &mut self,
        grid:       &Grid,
        q_from:     &[Cell],
        tables:     &[&DistTable],
        priorities: &[f64],
        rng:        &mut SimRng,
    ) -> Vec<Cell> {
        let n = q_from.len();
        debug_assert_eq!(tables.len(), n);
        debug_assert_eq!(priorities.len(), n);
        debug_assert!(self.occupancy.is_clear(), "scratch buffers dirty at step start");

        // ── Register the current configuration ────────────────────────────
        let mut q_to = vec![Cell::NONE; n];
        for (i, &c) in q_from.iter().enumerate() {
            debug_assert!(grid.passable(c), "agent {i} on impassable cell {c}");
            debug_assert_eq!(
                self.occupancy.now(c),
                AgentId::INVALID,
                "two agents share cell {c}"
            );
            self.occupancy.mark_now(c, AgentId(i as u32));
        }

        // ── Priority order: descending, stable ties by index ──────────────
        self.order.clear();
        self.order.extend(0..n as u32);
        self.order
            .sort_by(|&a, &b| priorities[b as usize].total_cmp(&priorities[a as usize]));

        // ── Decide every agent ────────────────────────────────────────────
        let order = std::mem::take(&mut self.order);
        {
            let mut ctx = StepCtx {
                grid,
                q_from,
                tables,
                q_to: &mut q_to,
                occupancy: &mut self.occupancy,
                rng,
            };
            for &i in &order {
                if ctx.q_to[i as usize].is_none() {
                    ctx.decide(i as usize);
                }
            }
        }
        self.order = order;

        // ── Clear scratch buffers at the touched cells ────────────────────
        for (&from, &to) in q_from.iter().zip(q_to.iter()) {
            self.occupancy.clear_now(from);
            self.occupancy.clear_nxt(to);
        }
        debug_assert!(self.occupancy.is_clear(), "scratch buffers dirty at step end");

        q_to
    }
}

// ── Per-step context ──────────────────────────────────────────────────────────

/// Borrowed state for one step, so the recursion has a single `&mut self`.
struct StepCtx<'a> {
    grid:      &'a Grid,
    q_from:    &'a [Cell],
    tables:    &'a [&'a DistTable],
    q_to:      &'a mut [Cell],
    occupancy: &'a mut OccupancyView,
    rng:       &'a mut SimRng,
}

impl StepCtx<'_> {
    /// Decide agent `i`'s next cell.  Returns `false` on the give-up path,
    /// in which case `i` stays at its current cell.
    fn decide(&mut self, i: usize) -> bool {
        let from = self.q_from[i];

        // Candidates: stay + passable neighbors, shuffled for fairness, then
        // stable-sorted by goal distance — closest first, ties in shuffled
        // order.
        let mut candidates: Vec<Cell> = Vec::with_capacity(5);
        candidates.push(from);
        candidates.extend(self.grid.neighbors(from));
        self.rng.shuffle(&mut candidates);
        let table = self.tables[i];
        candidates.sort_by_key(|&v| table.get(v));

        for v in candidates {
            // Vertex conflict: someone already holds v for the next tick.
            if self.occupancy.nxt(v) != AgentId::INVALID {
                continue;
            }
            // Edge conflict: the current occupant of v is moving into our cell.
            let j = self.occupancy.now(v);
            if j != AgentId::INVALID && self.q_to[j.index()] == from {
                continue;
            }

            // Tentatively commit.
            self.q_to[i] = v;
            self.occupancy.mark_nxt(v, AgentId(i as u32));

            // Priority inheritance: push the undecided occupant out first.
            if j != AgentId::INVALID && self.q_to[j.index()].is_none() && !self.decide(j.index()) {
                // The occupant gave up and reclaimed v for itself; retreat.
                self.q_to[i] = Cell::NONE;
                if self.occupancy.nxt(v) == AgentId(i as u32) {
                    self.occupancy.clear_nxt(v);
                }
                continue;
            }
            return true;
        }

        // Give up: stay in place.  This may overwrite a caller's tentative
        // claim on our cell — the caller detects that and retreats.
        self.q_to[i] = from;
        self.occupancy.mark_nxt(from, AgentId(i as u32));
        false
    }
}
