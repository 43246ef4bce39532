//! Validated construction of a [`Coordinator`].

use rustc_hash::FxHashSet;

use wh_core::{AgentId, Cell, SimConfig, SimRng, Tick};
use wh_grid::{DistCache, Grid, INF};
use wh_pibt::Pibt;
use wh_station::{StationKind, StationSet};

use crate::{AgentState, Coordinator, SimError, SimResult};

/// Builder for [`Coordinator`].
///
/// # Required inputs
///
/// - the grid,
/// - the start cells (one per agent, distinct and passable),
/// - three non-empty station cell sets (loaders, dumps, chargers).
///
/// # Optional inputs
///
/// | Method       | Default                |
/// |--------------|------------------------|
/// | `.config(c)` | `SimConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut coordinator = CoordinatorBuilder::new(grid, starts, loaders, dumps, chargers)
///     .config(SimConfig { seed: 42, ..SimConfig::default() })
///     .build()?;
/// let snapshot = coordinator.step();
/// ```
pub struct CoordinatorBuilder {
    grid:     Grid,
    starts:   Vec<Cell>,
    loaders:  Vec<Cell>,
    dumps:    Vec<Cell>,
    chargers: Vec<Cell>,
    config:   SimConfig,
}

impl CoordinatorBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        grid:     Grid,
        starts:   Vec<Cell>,
        loaders:  Vec<Cell>,
        dumps:    Vec<Cell>,
        chargers: Vec<Cell>,
    ) -> Self {
        Self {
            grid,
            starts,
            loaders,
            dumps,
            chargers,
            config: SimConfig::default(),
        }
    }

    /// Override the default tunables.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate all inputs, perform the initial loader acquisition, and
    /// return a ready-to-run [`Coordinator`] at tick 0.
    pub fn build(self) -> SimResult<Coordinator> {
        // ── Validation ────────────────────────────────────────────────────
        self.config.validate()?;

        if self.grid.is_empty() {
            return Err(SimError::EmptyGrid);
        }
        if self.starts.is_empty() {
            return Err(SimError::NoAgents);
        }
        let mut seen: FxHashSet<Cell> = FxHashSet::default();
        for &s in &self.starts {
            if !self.grid.passable(s) {
                return Err(SimError::BlockedStart(s));
            }
            if !seen.insert(s) {
                return Err(SimError::DuplicateStart(s));
            }
        }
        for (kind, cells) in [
            (StationKind::Loader, &self.loaders),
            (StationKind::Dump, &self.dumps),
            (StationKind::Charger, &self.chargers),
        ] {
            if cells.is_empty() {
                return Err(SimError::EmptyStationSet { kind });
            }
            for &cell in cells {
                if !self.grid.passable(cell) {
                    return Err(SimError::BlockedStation { kind, cell });
                }
            }
        }

        // ── Assembly ──────────────────────────────────────────────────────
        let n = self.starts.len();

        // Pre-build distance tables for every station cell; staging cells
        // and other goals are warmed lazily as they appear.
        let mut dist = DistCache::new();
        for &c in self.loaders.iter().chain(&self.dumps).chain(&self.chargers) {
            dist.warm(&self.grid, c);
        }

        let pibt = Pibt::new(&self.grid);
        let mut coordinator = Coordinator {
            positions:        self.starts,
            states:           vec![AgentState::new(self.config.battery_max); n],
            priorities:       vec![0.0; n],
            loaders:          StationSet::new(StationKind::Loader, self.loaders),
            dumps:            StationSet::new(StationKind::Dump, self.dumps),
            chargers:         StationSet::new(StationKind::Charger, self.chargers),
            dist,
            pibt,
            rng:              SimRng::new(self.config.seed),
            staging_reserved: FxHashSet::default(),
            tick:             Tick::ZERO,
            grid:             self.grid,
            config:           self.config,
        };

        // Initial loader acquisition, in agent-index order: claim the
        // nearest free slot or queue up and stage.
        for i in 0..n {
            coordinator.assign_loader(AgentId(i as u32));
        }

        // Seed priorities with the normalised distance to the first goal —
        // a fraction below 1, so off-goal growth dominates from tick 1 while
        // the start distance stays as a tie-break.
        let cells = coordinator.grid.cell_count() as f64;
        for i in 0..n {
            let goal = coordinator.states[i].goal;
            let pos = coordinator.positions[i];
            let d = coordinator.dist.dist(&coordinator.grid, goal, pos);
            coordinator.priorities[i] = if d == INF { 0.0 } else { d as f64 / cells };
        }

        Ok(coordinator)
    }
}
