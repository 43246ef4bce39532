//! The per-tick lifecycle passes: arrivals, dwell and charge progression,
//! station acquisition, staging, and queue promotions.
//!
//! All passes iterate agents in ascending index order and slots in ascending
//! slot order — together with the single RNG stream this makes every tick a
//! pure function of the prior state.
//!
//! # Station selection
//!
//! | Pool     | Selection when a slot is free                |
//! |----------|----------------------------------------------|
//! | loaders  | nearest by BFS distance (lowest slot on tie) |
//! | dumps    | uniformly random among free slots            |
//! | chargers | nearest by BFS distance (lowest slot on tie) |
//!
//! When every slot is held, the agent joins the shortest queue and parks on
//! a reserved staging cell near the station until promoted.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use wh_core::{AgentId, Cell, SlotId};
use wh_grid::{DistCache, Grid};
use wh_station::{StationKind, StationSet};

use crate::{AgentMode, Claim, Coordinator, Event, GoalKind};

impl Coordinator {
    // ── Pass 1: arrivals ──────────────────────────────────────────────────

    /// Detect agents that reached their claimed station on the previous
    /// tick and fire the corresponding transition.
    pub(crate) fn process_arrivals(&mut self, events: &mut Vec<Event>) {
        for i in 0..self.states.len() {
            let agent = AgentId(i as u32);
            let pos = self.positions[i];

            // Loader reached: begin the pickup dwell.
            if self.states[i].mode == AgentMode::ToLoad
                && self.claim_cell_reached(i, StationKind::Loader).is_some()
            {
                let dwell = self
                    .rng
                    .gen_range(self.config.dwell_min..=self.config.dwell_max);
                let st = &mut self.states[i];
                st.mode = AgentMode::AtLoadWait;
                st.goal_kind = GoalKind::Stay;
                st.goal = pos;
                st.dwell = dwell;
                events.push(Event::ArrivedLoader { agent, at: pos, dwell_steps: dwell });
            }

            // Dump reached: release the slot immediately, then head for a
            // charger if the battery is low, otherwise back to a loader.
            if self.states[i].mode == AgentMode::ToDump {
                if let Some(k) = self.claim_cell_reached(i, StationKind::Dump) {
                    self.dumps.release_if_holder(k, agent);
                    self.states[i].claim = None;
                    events.push(Event::ArrivedDump { agent, at: pos });

                    if self.states[i].battery <= self.config.battery_low {
                        self.assign_charger(agent);
                        events.push(Event::GoalCharge { agent, goal: self.states[i].goal });
                    } else {
                        self.assign_loader(agent);
                        events.push(Event::GoalLoader { agent, goal: self.states[i].goal });
                    }
                }
            }

            // Charger reached: start charging in place.
            if self.states[i].mode == AgentMode::ToCharge {
                if let Some(k) = self.claim_cell_reached(i, StationKind::Charger) {
                    let cell = self.chargers.cell(k);
                    let st = &mut self.states[i];
                    st.mode = AgentMode::Charging;
                    st.goal_kind = GoalKind::Charge;
                    st.goal = cell;
                    events.push(Event::ArrivedCharger { agent, at: pos });
                }
            }

            if self.states[i].mode == AgentMode::Staging {
                self.states[i].goal_kind = GoalKind::Staging;
            }
        }
    }

    /// The slot of `kind` that agent `i` holds AND currently stands on.
    fn claim_cell_reached(&self, i: usize, kind: StationKind) -> Option<SlotId> {
        match self.states[i].claim {
            Some(c) if c.kind == kind
                && self.positions[i] == self.station_set(kind).cell(c.slot) =>
            {
                Some(c.slot)
            }
            _ => None,
        }
    }

    // ── Pass 2: dwell and charge progression ──────────────────────────────

    pub(crate) fn progress_dwell_and_charge(&mut self, events: &mut Vec<Event>) {
        for i in 0..self.states.len() {
            let agent = AgentId(i as u32);
            match self.states[i].mode {
                // Pickup dwell: count down; on zero, release the loader and
                // head for a dump.
                AgentMode::AtLoadWait => {
                    if self.states[i].dwell > 0 {
                        self.states[i].dwell -= 1;
                        if self.states[i].dwell == 0 {
                            if let Some(claim) = self.states[i].claim {
                                if claim.kind == StationKind::Loader {
                                    self.loaders.release_if_holder(claim.slot, agent);
                                    self.states[i].claim = None;
                                }
                            }
                            self.assign_dump(agent);
                            events.push(Event::DwellFinished { agent });
                            events.push(Event::GoalDump { agent, goal: self.states[i].goal });
                        }
                    }
                }

                // Charging: gain charge, then check the resume policy.
                AgentMode::Charging => {
                    let st = &mut self.states[i];
                    st.battery = (st.battery + self.config.charge_rate).min(self.config.battery_max);
                    let value = st.battery;
                    let resume = match self.config.resume_policy {
                        wh_core::ResumePolicy::Full => value >= self.config.battery_max,
                        wh_core::ResumePolicy::Threshold => {
                            value >= (self.config.battery_low + 200).max(self.config.charge_rate * 3)
                        }
                    };
                    events.push(Event::Battery { agent, value });

                    if resume {
                        if let Some(claim) = self.states[i].claim {
                            if claim.kind == StationKind::Charger {
                                self.chargers.release_if_holder(claim.slot, agent);
                                self.states[i].claim = None;
                            }
                        }
                        self.assign_loader(agent);
                        events.push(Event::LeaveCharger { agent });
                        events.push(Event::GoalLoader { agent, goal: self.states[i].goal });
                    }
                }

                _ => {}
            }
        }
    }

    // ── Pass 3: queue promotions ──────────────────────────────────────────

    /// For every slot that lost its holder this tick, promote the queue
    /// head.  Runs before the planner step, so the promoted agent heads for
    /// its station on the very next move.
    pub(crate) fn promote_queues(&mut self, events: &mut Vec<Event>) {
        for kind in [StationKind::Loader, StationKind::Dump, StationKind::Charger] {
            let set = match kind {
                StationKind::Loader  => &mut self.loaders,
                StationKind::Dump    => &mut self.dumps,
                StationKind::Charger => &mut self.chargers,
            };
            for k in 0..set.len() {
                let k = SlotId(k as u16);
                let Some(agent) = set.pop_next(k) else { continue };
                let station = set.cell(k);

                let st = &mut self.states[agent.index()];
                if st.mode == AgentMode::Staging {
                    st.mode = match kind {
                        StationKind::Loader  => AgentMode::ToLoad,
                        StationKind::Dump    => AgentMode::ToDump,
                        StationKind::Charger => AgentMode::ToCharge,
                    };
                }
                st.goal_kind = match kind {
                    StationKind::Loader  => GoalKind::Load,
                    StationKind::Dump    => GoalKind::Dump,
                    StationKind::Charger => GoalKind::Charge,
                };
                st.goal = station;
                st.claim = Some(Claim { kind, slot: k });
                if let Some(sc) = st.staging.take() {
                    self.staging_reserved.remove(&sc);
                }

                events.push(match kind {
                    StationKind::Loader  => Event::LoaderClaimed { agent, station },
                    StationKind::Dump    => Event::DumpClaimed { agent, station },
                    StationKind::Charger => Event::ChargerClaimed { agent, station },
                });
            }
        }
    }

    // ── Station acquisition ───────────────────────────────────────────────

    /// Claim the nearest free loader, or queue up and stage.
    pub(crate) fn assign_loader(&mut self, agent: AgentId) {
        let pos = self.positions[agent.index()];
        if let Some(k) = nearest_unclaimed(&self.grid, &mut self.dist, &self.loaders, pos) {
            if self.loaders.claim_if_free(k, agent) {
                let goal = self.loaders.cell(k);
                let st = &mut self.states[agent.index()];
                st.mode = AgentMode::ToLoad;
                st.goal_kind = GoalKind::Load;
                st.goal = goal;
                st.claim = Some(Claim { kind: StationKind::Loader, slot: k });
                return;
            }
        }
        let k = self.loaders.shortest_queue();
        self.loaders.enqueue(k, agent);
        let near = self.loaders.cell(k);
        self.enter_staging(agent, near);
    }

    /// Claim a uniformly random free dump, or queue up and stage.
    pub(crate) fn assign_dump(&mut self, agent: AgentId) {
        let mut slots: Vec<SlotId> = self.dumps.slot_ids().collect();
        self.rng.shuffle(&mut slots);
        for k in slots {
            if self.dumps.claim_if_free(k, agent) {
                let goal = self.dumps.cell(k);
                let st = &mut self.states[agent.index()];
                st.mode = AgentMode::ToDump;
                st.goal_kind = GoalKind::Dump;
                st.goal = goal;
                st.claim = Some(Claim { kind: StationKind::Dump, slot: k });
                return;
            }
        }
        let k = self.dumps.shortest_queue();
        self.dumps.enqueue(k, agent);
        let near = self.dumps.cell(k);
        self.enter_staging(agent, near);
    }

    /// Claim the nearest free charger, or queue up and stage.
    pub(crate) fn assign_charger(&mut self, agent: AgentId) {
        let pos = self.positions[agent.index()];
        if let Some(k) = nearest_unclaimed(&self.grid, &mut self.dist, &self.chargers, pos) {
            if self.chargers.claim_if_free(k, agent) {
                let goal = self.chargers.cell(k);
                let st = &mut self.states[agent.index()];
                st.mode = AgentMode::ToCharge;
                st.goal_kind = GoalKind::Charge;
                st.goal = goal;
                st.claim = Some(Claim { kind: StationKind::Charger, slot: k });
                return;
            }
        }
        let k = self.chargers.shortest_queue();
        self.chargers.enqueue(k, agent);
        let near = self.chargers.cell(k);
        self.enter_staging(agent, near);
    }

    // ── Staging ───────────────────────────────────────────────────────────

    /// Park `agent` on a reserved staging cell near `near`, or in place if
    /// the whole floor is saturated.
    fn enter_staging(&mut self, agent: AgentId, near: Cell) {
        let pos = self.positions[agent.index()];
        let staging = self.find_staging_cell(near);
        if let Some(c) = staging {
            self.staging_reserved.insert(c);
        }

        let st = &mut self.states[agent.index()];
        st.mode = AgentMode::Staging;
        st.goal_kind = GoalKind::Staging;
        st.claim = None;
        st.staging = staging;
        st.goal = staging.unwrap_or(pos);
    }

    /// Ring search outward from `target` for a parking spot: the nearest
    /// passable cell that is not occupied, not already reserved for
    /// staging, and not itself a station cell.
    ///
    /// The ring expands over the whole floor (through blocked cells), so a
    /// fully reserved neighborhood does not trap the search; if the chosen
    /// cell turns out unreachable for the agent, the unreachable-goal
    /// policy pins it instead.
    fn find_staging_cell(&self, target: Cell) -> Option<Cell> {
        let occupied: FxHashSet<Cell> = self.positions.iter().copied().collect();
        let reserved = |c: Cell| {
            occupied.contains(&c)
                || self.staging_reserved.contains(&c)
                || self.loaders.contains_cell(c)
                || self.dumps.contains_cell(c)
                || self.chargers.contains_cell(c)
        };

        let mut seen = vec![false; self.grid.cell_count()];
        let mut queue: VecDeque<Cell> = VecDeque::new();
        seen[target.index(self.grid.width())] = true;
        queue.push_back(target);

        while let Some(c) = queue.pop_front() {
            if self.grid.passable(c) && !reserved(c) {
                return Some(c);
            }
            for n in self.grid.adjacent(c) {
                let idx = n.index(self.grid.width());
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(n);
                }
            }
        }
        None
    }
}

// ── Slot selection helpers ────────────────────────────────────────────────────

/// The free slot of `set` closest to `pos` by BFS distance, lowest slot
/// index on ties.  `None` if every slot is held.
fn nearest_unclaimed(
    grid: &Grid,
    dist: &mut DistCache,
    set:  &StationSet,
    pos:  Cell,
) -> Option<SlotId> {
    let mut best: Option<(u32, SlotId)> = None;
    for k in set.slot_ids() {
        if set.is_taken(k) {
            continue;
        }
        let d = dist.dist(grid, set.cell(k), pos);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, k));
        }
    }
    best.map(|(_, k)| k)
}
