//! BFS distance fields and their per-target cache.
//!
//! # Cost model
//!
//! Edges are unit cost, so plain breadth-first search replaces Dijkstra: the
//! FIFO queue discipline guarantees the first visit to a cell is along a
//! shortest path.  A table costs O(H·W) to build and O(1) to query; the
//! planner's heuristic is a single `get` per candidate cell.
//!
//! # Caching
//!
//! Station cells and staging cells recur as targets for the whole run, so
//! tables are memoised by target coordinate in [`DistCache`].  Tables are
//! immutable once built and never evicted; the working set is bounded by the
//! number of distinct goals a run ever produces.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use wh_core::Cell;

use crate::Grid;

/// Marks a cell unreachable from the table's source.
pub const INF: u32 = u32::MAX;

// ── DistTable ─────────────────────────────────────────────────────────────────

/// Dense BFS distance field from one source cell.
///
/// If the source is blocked, every entry is [`INF`].
#[derive(Clone, Debug)]
pub struct DistTable {
    width: u16,
    dist:  Vec<u32>,
}

impl DistTable {
    /// Run BFS on the passability graph from `source`.
    pub fn build(grid: &Grid, source: Cell) -> Self {
        let width = grid.width();
        let mut dist = vec![INF; grid.cell_count()];

        if grid.passable(source) {
            dist[source.index(width)] = 0;
            let mut queue: VecDeque<Cell> = VecDeque::new();
            queue.push_back(source);

            while let Some(u) = queue.pop_front() {
                let next = dist[u.index(width)] + 1;
                for v in grid.neighbors(u) {
                    let slot = &mut dist[v.index(width)];
                    if next < *slot {
                        *slot = next;
                        queue.push_back(v);
                    }
                }
            }
        }

        Self { width, dist }
    }

    /// BFS distance from the source to `c`; [`INF`] if unreachable.
    #[inline]
    pub fn get(&self, c: Cell) -> u32 {
        self.dist[c.index(self.width)]
    }

    #[inline]
    pub fn reachable(&self, c: Cell) -> bool {
        self.get(c) != INF
    }
}

// ── DistCache ─────────────────────────────────────────────────────────────────

/// Distance tables memoised by target coordinate.
///
/// `warm` builds on first request; `get` is the read-only lookup used when
/// the caller needs several tables borrowed at once (warm every goal first,
/// then collect the shared references).
#[derive(Default)]
pub struct DistCache {
    tables: FxHashMap<Cell, DistTable>,
}

impl DistCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for `target`, building and caching it on a miss.
    pub fn warm(&mut self, grid: &Grid, target: Cell) -> &DistTable {
        self.tables
            .entry(target)
            .or_insert_with(|| DistTable::build(grid, target))
    }

    /// The cached table for `target`, if one was built.
    #[inline]
    pub fn get(&self, target: Cell) -> Option<&DistTable> {
        self.tables.get(&target)
    }

    /// The cached table for `target`.
    ///
    /// # Panics
    /// Panics if the table was never built — call [`warm`](Self::warm)
    /// first.  Intended for callers that warm a whole goal vector and then
    /// collect the shared references.
    #[inline]
    pub fn table(&self, target: Cell) -> &DistTable {
        match self.tables.get(&target) {
            Some(t) => t,
            None => panic!("no distance table for target {target}"),
        }
    }

    /// BFS distance from `target` to `pos`, building the table if needed.
    #[inline]
    pub fn dist(&mut self, grid: &Grid, target: Cell, pos: Cell) -> u32 {
        self.warm(grid, target).get(pos)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
