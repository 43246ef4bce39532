//! `StationSet` — one pool of station slots.
//!
//! # Data layout
//!
//! Parallel vectors indexed by `SlotId`: the slot cell, the current holder,
//! the FIFO queue, and a hash-set mirror of the queue for O(1) membership
//! checks (an agent must not be enqueued twice).

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;

use wh_core::{AgentId, Cell, SlotId};

/// Which pool a station belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StationKind {
    Loader,
    Dump,
    Charger,
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationKind::Loader  => write!(f, "loader"),
            StationKind::Dump    => write!(f, "dump"),
            StationKind::Charger => write!(f, "charger"),
        }
    }
}

/// One pool of station slots with exclusive holders and FIFO queues.
pub struct StationSet {
    kind:     StationKind,
    cells:    Vec<Cell>,
    holder:   Vec<Option<AgentId>>,
    queue:    Vec<VecDeque<AgentId>>,
    in_queue: Vec<FxHashSet<AgentId>>,
}

impl StationSet {
    pub fn new(kind: StationKind, cells: Vec<Cell>) -> Self {
        let n = cells.len();
        Self {
            kind,
            cells,
            holder:   vec![None; n],
            queue:    vec![VecDeque::new(); n],
            in_queue: vec![FxHashSet::default(); n],
        }
    }

    // ── Structure ─────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> StationKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid cell of slot `k`.
    #[inline]
    pub fn cell(&self, k: SlotId) -> Cell {
        self.cells[k.index()]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterator over all `SlotId`s in ascending index order.
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        (0..self.cells.len() as u16).map(SlotId)
    }

    /// `true` if `c` is one of this set's slot cells.
    pub fn contains_cell(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    // ── Claims ────────────────────────────────────────────────────────────

    #[inline]
    pub fn holder_of(&self, k: SlotId) -> Option<AgentId> {
        self.holder[k.index()]
    }

    #[inline]
    pub fn is_taken(&self, k: SlotId) -> bool {
        self.holder[k.index()].is_some()
    }

    /// Claim slot `k` for `agent` if it has no holder.  Returns `true` on
    /// success.
    pub fn claim_if_free(&mut self, k: SlotId, agent: AgentId) -> bool {
        let slot = &mut self.holder[k.index()];
        if slot.is_none() {
            *slot = Some(agent);
            true
        } else {
            false
        }
    }

    /// Clear the holder of `k`, but only if it is `agent`.
    pub fn release_if_holder(&mut self, k: SlotId, agent: AgentId) {
        let slot = &mut self.holder[k.index()];
        if *slot == Some(agent) {
            *slot = None;
        }
    }

    // ── Queues ────────────────────────────────────────────────────────────

    /// Append `agent` to slot `k`'s queue unless it is already waiting there
    /// or currently holds the slot.
    pub fn enqueue(&mut self, k: SlotId, agent: AgentId) {
        if !self.in_queue[k.index()].contains(&agent) && self.holder[k.index()] != Some(agent) {
            self.queue[k.index()].push_back(agent);
            self.in_queue[k.index()].insert(agent);
        }
    }

    /// If slot `k` has no holder and a non-empty queue, promote the queue
    /// head to holder and return it.
    pub fn pop_next(&mut self, k: SlotId) -> Option<AgentId> {
        if self.holder[k.index()].is_some() {
            return None;
        }
        let agent = self.queue[k.index()].pop_front()?;
        self.in_queue[k.index()].remove(&agent);
        self.holder[k.index()] = Some(agent);
        Some(agent)
    }

    #[inline]
    pub fn queue_len(&self, k: SlotId) -> usize {
        self.queue[k.index()].len()
    }

    /// The slot with the shortest queue; ties break toward the lowest index.
    ///
    /// # Panics
    /// Panics if the set is empty (the coordinator rejects empty sets at
    /// construction).
    pub fn shortest_queue(&self) -> SlotId {
        let k = self
            .queue
            .iter()
            .enumerate()
            .min_by_key(|(_, q)| q.len())
            .map(|(k, _)| k)
            .unwrap_or_else(|| panic!("shortest_queue on empty {} set", self.kind));
        SlotId(k as u16)
    }
}
