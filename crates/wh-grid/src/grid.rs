//! The warehouse floor: a rectangular 4-connected passability grid.
//!
//! # Data layout
//!
//! Passability is one dense row-major `Vec<bool>` indexed by
//! `Cell::index(width)` — a contiguous memory scan for the BFS inner loop
//! and O(1) lookups everywhere else.  The grid is immutable after
//! construction; every other component borrows it.
//!
//! # Neighbor order
//!
//! [`Grid::neighbors`] enumerates up, down, left, right.  BFS results do not
//! depend on this order, but the planner uses it as the base candidate order
//! before shuffling, so it is part of the reproducibility contract.

use wh_core::Cell;

/// Immutable rectangular passability map.
#[derive(Clone, Debug)]
pub struct Grid {
    height:   u16,
    width:    u16,
    passable: Vec<bool>,
}

impl Grid {
    /// A fully passable `height × width` grid.
    pub fn open(height: u16, width: u16) -> Self {
        Self {
            height,
            width,
            passable: vec![true; height as usize * width as usize],
        }
    }

    /// Build a grid by evaluating `f` at every cell.
    pub fn from_fn<F: FnMut(Cell) -> bool>(height: u16, width: u16, mut f: F) -> Self {
        let mut passable = Vec::with_capacity(height as usize * width as usize);
        for row in 0..height {
            for col in 0..width {
                passable.push(f(Cell::new(row, col)));
            }
        }
        Self { height, width, passable }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total number of cells, passable or not.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.passable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passable.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `c` lies inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// `true` if `c` is inside the grid and not blocked.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.contains(c) && self.passable[c.index(self.width)]
    }

    /// The up-to-four passable 4-connected neighbors of `c`, in the fixed
    /// order up, down, left, right.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        let up    = (c.row > 0).then(|| Cell::new(c.row - 1, c.col));
        let down  = Some(Cell::new(c.row + 1, c.col));
        let left  = (c.col > 0).then(|| Cell::new(c.row, c.col - 1));
        let right = Some(Cell::new(c.row, c.col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |&n| self.passable(n))
    }

    /// The up-to-four in-bounds 4-connected neighbors of `c`, passable or
    /// not, in the fixed order up, down, left, right.
    ///
    /// Used by ring searches that expand over the whole floor (e.g. the
    /// staging-cell search) rather than the passability graph.
    pub fn adjacent(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        let up    = (c.row > 0).then(|| Cell::new(c.row - 1, c.col));
        let down  = Some(Cell::new(c.row + 1, c.col));
        let left  = (c.col > 0).then(|| Cell::new(c.row, c.col - 1));
        let right = Some(Cell::new(c.row, c.col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |&n| self.contains(n))
    }

    /// Iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}
