//! The `Coordinator` struct and its tick loop.

use rustc_hash::FxHashSet;

use wh_core::{AgentId, Cell, SimConfig, SimRng, Tick};
use wh_grid::{DistCache, DistTable, Grid, INF};
use wh_pibt::Pibt;
use wh_station::{StationKind, StationSet};

use crate::{AgentState, Event, SimObserver, TickSnapshot};

/// The warehouse coordinator: owns all simulation state and drives the
/// tick-synchronous loop.
///
/// One call to [`step`](Self::step) is one tick, with the phase order fixed:
///
/// 1. **Lifecycle**: arrivals, dwell/charge progression, queue promotions.
/// 2. **Goals**: assemble the goal vector; pin agents whose goal is
///    unreachable; refresh distance tables for goals that changed.
/// 3. **Planner**: the collision-free next configuration.
/// 4. **Accounting**: battery decrement for movers, priority update,
///    clock advance.
///
/// A tick is atomic — there are no suspension points inside `step`, so an
/// observer always sees a fully consistent [`TickSnapshot`].
///
/// Create via [`CoordinatorBuilder`][crate::CoordinatorBuilder].
pub struct Coordinator {
    pub(crate) config: SimConfig,
    pub(crate) grid:   Grid,

    /// The current configuration, indexed by agent.
    pub(crate) positions: Vec<Cell>,

    /// Per-agent lifecycle state, indexed by agent.
    pub(crate) states: Vec<AgentState>,

    /// Planner priorities.  +1 per tick off-goal; the integer part resets
    /// on arrival, preserving the fraction as a stable tie-break.
    pub(crate) priorities: Vec<f64>,

    pub(crate) loaders:  StationSet,
    pub(crate) dumps:    StationSet,
    pub(crate) chargers: StationSet,

    /// Distance tables memoised by goal cell.
    pub(crate) dist: DistCache,

    /// The planner, owning its occupancy scratch buffers.
    pub(crate) pibt: Pibt,

    /// The single RNG stream (see `wh_core::rng` for the draw-order
    /// contract).
    pub(crate) rng: SimRng,

    /// Cells currently reserved as staging spots for queued agents.
    pub(crate) staging_reserved: FxHashSet<Cell>,

    pub(crate) tick: Tick,
}

impl Coordinator {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    pub fn step(&mut self) -> TickSnapshot {
        let mut events = Vec::new();

        // ── Phase 1: lifecycle ────────────────────────────────────────────
        self.process_arrivals(&mut events);
        self.progress_dwell_and_charge(&mut events);
        self.promote_queues(&mut events);

        // ── Phase 2: goal vector + table refresh ──────────────────────────
        let goals = self.assemble_goals(&mut events);

        // ── Phase 3: planner ──────────────────────────────────────────────
        let q_next = {
            let tables: Vec<&DistTable> = goals.iter().map(|&g| self.dist.table(g)).collect();
            self.pibt
                .step(&self.grid, &self.positions, &tables, &self.priorities, &mut self.rng)
        };

        // ── Phase 4: batteries, priorities, clock ─────────────────────────
        for (i, (&from, &to)) in self.positions.iter().zip(q_next.iter()).enumerate() {
            if from != to {
                self.states[i].battery = self.states[i].battery.saturating_sub(1);
            }
        }
        for (i, &to) in q_next.iter().enumerate() {
            if to != self.states[i].goal {
                self.priorities[i] += 1.0;
            } else {
                self.priorities[i] -= self.priorities[i].floor();
            }
        }

        self.positions = q_next;
        self.tick = self.tick + 1;

        #[cfg(debug_assertions)]
        self.check_invariants();

        TickSnapshot {
            t:         self.tick,
            positions: self.positions.clone(),
            goals,
            batteries: self.states.iter().map(|s| s.battery).collect(),
            events,
        }
    }

    /// Run exactly `n` ticks, calling observer hooks at every boundary.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.tick);
            let snapshot = self.step();
            observer.on_tick_end(&snapshot);
        }
        observer.on_sim_end(self.tick);
    }

    // ── Read-only access ──────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.states.len()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    pub fn states(&self) -> &[AgentState] {
        &self.states
    }

    pub fn state(&self, agent: AgentId) -> &AgentState {
        &self.states[agent.index()]
    }

    pub fn priorities(&self) -> &[f64] {
        &self.priorities
    }

    /// The station pool of the given kind.
    pub fn station_set(&self, kind: StationKind) -> &StationSet {
        match kind {
            StationKind::Loader  => &self.loaders,
            StationKind::Dump    => &self.dumps,
            StationKind::Charger => &self.chargers,
        }
    }

    // ── Goal assembly ─────────────────────────────────────────────────────

    /// Build the goal vector the planner will consume, warming distance
    /// tables and applying the unreachable-goal pinning policy.
    fn assemble_goals(&mut self, events: &mut Vec<Event>) -> Vec<Cell> {
        let n = self.states.len();
        let mut goals = Vec::with_capacity(n);
        for i in 0..n {
            let pos = self.positions[i];
            let goal = match self.states[i].goal_kind {
                crate::GoalKind::Stay => pos,
                _ => self.states[i].goal,
            };
            self.dist.warm(&self.grid, goal);

            let goal = if self.dist.table(goal).get(pos) == INF {
                // Unreachable goal: pin the agent at its current cell until
                // the lifecycle hands it a new one.
                self.states[i].goal = pos;
                self.dist.warm(&self.grid, pos);
                events.push(Event::GoalUnreachable { agent: AgentId(i as u32), goal });
                pos
            } else {
                goal
            };
            goals.push(goal);
        }
        goals
    }

    // ── Invariant checks (debug builds only) ──────────────────────────────

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::AgentMode;

        // No two agents share a cell, and everyone is on a passable cell.
        let mut seen: FxHashSet<Cell> = FxHashSet::default();
        for (i, &c) in self.positions.iter().enumerate() {
            debug_assert!(self.grid.passable(c), "agent {i} on impassable cell {c}");
            debug_assert!(seen.insert(c), "two agents occupy cell {c}");
        }

        for (i, st) in self.states.iter().enumerate() {
            // En-route modes require a claim; the claimed slot must agree.
            if matches!(st.mode, AgentMode::ToLoad | AgentMode::ToDump | AgentMode::ToCharge) {
                debug_assert!(st.claim.is_some(), "agent {i} en route without a claim");
            }
            if let Some(claim) = st.claim {
                debug_assert_eq!(
                    self.station_set(claim.kind).holder_of(claim.slot),
                    Some(AgentId(i as u32)),
                    "agent {i} claim out of sync with {} slot {}",
                    claim.kind,
                    claim.slot,
                );
            }
        }

        // Every holder corresponds to exactly one claim.
        for kind in [StationKind::Loader, StationKind::Dump, StationKind::Charger] {
            let set = self.station_set(kind);
            for k in set.slot_ids() {
                if let Some(a) = set.holder_of(k) {
                    let st = &self.states[a.index()];
                    debug_assert!(
                        st.claim.map(|c| (c.kind, c.slot)) == Some((kind, k)),
                        "{kind} slot {k} held by agent {a} without a matching claim"
                    );
                }
            }
        }
    }
}
