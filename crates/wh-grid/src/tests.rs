//! Unit tests for wh-grid.
//!
//! All tests use hand-crafted grids so they run without any map file.

#[cfg(test)]
mod helpers {
    use wh_core::Cell;

    use crate::Grid;

    /// 3×4 grid with a wall segment:
    ///
    /// ```text
    /// . . . .
    /// . @ @ .
    /// . . . .
    /// ```
    ///
    /// Shortest (0,0) → (1,3) must detour around the wall: length 4.
    pub fn walled_grid() -> Grid {
        Grid::from_fn(3, 4, |c: Cell| !(c.row == 1 && (c.col == 1 || c.col == 2)))
    }
}

// ── Grid structure ────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use wh_core::Cell;

    use crate::Grid;

    #[test]
    fn open_grid_all_passable() {
        let g = Grid::open(2, 3);
        assert_eq!(g.cell_count(), 6);
        assert!(g.cells().all(|c| g.passable(c)));
    }

    #[test]
    fn out_of_bounds_not_passable() {
        let g = Grid::open(2, 3);
        assert!(!g.passable(Cell::new(2, 0)));
        assert!(!g.passable(Cell::new(0, 3)));
        assert!(!g.passable(Cell::NONE));
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let g = Grid::open(3, 3);
        let n: Vec<Cell> = g.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![
                Cell::new(0, 1), // up
                Cell::new(2, 1), // down
                Cell::new(1, 0), // left
                Cell::new(1, 2), // right
            ]
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let g = Grid::open(3, 3);
        let n: Vec<Cell> = g.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn blocked_cells_excluded_from_neighbors() {
        let g = super::helpers::walled_grid();
        let n: Vec<Cell> = g.neighbors(Cell::new(0, 1)).collect();
        // Down (1,1) is blocked.
        assert_eq!(n, vec![Cell::new(0, 0), Cell::new(0, 2)]);
    }
}

// ── BFS distance tables ───────────────────────────────────────────────────────

#[cfg(test)]
mod dist {
    use wh_core::Cell;

    use crate::{DistCache, DistTable, Grid, INF};

    #[test]
    fn source_distance_is_zero() {
        let g = Grid::open(3, 3);
        let t = DistTable::build(&g, Cell::new(1, 1));
        assert_eq!(t.get(Cell::new(1, 1)), 0);
    }

    #[test]
    fn open_grid_distances_are_manhattan() {
        let g = Grid::open(4, 4);
        let t = DistTable::build(&g, Cell::new(0, 0));
        for c in g.cells() {
            assert_eq!(t.get(c), (c.row + c.col) as u32, "at {c}");
        }
    }

    #[test]
    fn wall_forces_detour() {
        let g = super::helpers::walled_grid();
        let t = DistTable::build(&g, Cell::new(0, 0));
        // Straight-line Manhattan would be 4; the wall allows it via row 0.
        assert_eq!(t.get(Cell::new(1, 3)), 4);
        // Directly behind the wall from below.
        assert_eq!(t.get(Cell::new(2, 2)), 4);
    }

    #[test]
    fn blocked_source_all_infinite() {
        let g = super::helpers::walled_grid();
        let t = DistTable::build(&g, Cell::new(1, 1));
        assert!(g.cells().all(|c| t.get(c) == INF));
    }

    #[test]
    fn unreachable_cell_is_infinite() {
        // Passable cell sealed off by walls.
        let g = Grid::from_fn(3, 3, |c: Cell| {
            c == Cell::new(0, 0) || c.row == 2 // isolated corner + open bottom row
        });
        let t = DistTable::build(&g, Cell::new(2, 0));
        assert_eq!(t.get(Cell::new(2, 2)), 2);
        assert_eq!(t.get(Cell::new(0, 0)), INF);
    }

    #[test]
    fn cache_memoises_by_target() {
        let g = Grid::open(3, 3);
        let mut cache = DistCache::new();
        assert!(cache.get(Cell::new(0, 0)).is_none());

        let d1 = cache.dist(&g, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(d1, 4);
        assert_eq!(cache.len(), 1);

        // Second request for the same target must not grow the cache.
        let d2 = cache.dist(&g, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(d2, 2);
        assert_eq!(cache.len(), 1);

        cache.warm(&g, Cell::new(2, 2));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(Cell::new(2, 2)).is_some());
    }
}

// ── Map parsing ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use std::io::Cursor;

    use wh_core::Cell;

    use crate::{parse_map_reader, parse_map_str, GridError};

    const SMALL_MAP: &str = "\
type octile
height 3
width 4
map
.@G.
T@.S
 ...
";

    #[test]
    fn parses_dimensions_and_passability() {
        let g = parse_map_str(SMALL_MAP).unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 4);

        assert!(g.passable(Cell::new(0, 0)));  // .
        assert!(!g.passable(Cell::new(0, 1))); // @
        assert!(g.passable(Cell::new(0, 2)));  // G
        assert!(g.passable(Cell::new(1, 0)));  // T
        assert!(g.passable(Cell::new(1, 3)));  // S
        assert!(g.passable(Cell::new(2, 0)));  // space
    }

    #[test]
    fn width_before_height_accepted() {
        let g = parse_map_str("width 2\nheight 1\nmap\n..\n").unwrap();
        assert_eq!((g.height(), g.width()), (1, 2));
    }

    #[test]
    fn unknown_characters_blocked() {
        let g = parse_map_str("height 1\nwidth 3\nmap\n.x.\n").unwrap();
        assert!(!g.passable(Cell::new(0, 1)));
    }

    #[test]
    fn short_row_rejected() {
        let err = parse_map_str("height 2\nwidth 3\nmap\n...\n..\n").unwrap_err();
        assert!(matches!(err, GridError::RowTooShort { row: 1, got: 2, expected: 3 }));
    }

    #[test]
    fn missing_map_marker_rejected() {
        let err = parse_map_str("height 2\nwidth 3\n...\n...\n").unwrap_err();
        assert!(matches!(err, GridError::MissingHeader("map")));
    }

    #[test]
    fn missing_dimension_rejected() {
        let err = parse_map_str("height 2\nmap\n..\n..\n").unwrap_err();
        assert!(matches!(err, GridError::MissingHeader("width")));
    }

    #[test]
    fn truncated_body_rejected() {
        let err = parse_map_str("height 3\nwidth 2\nmap\n..\n..\n").unwrap_err();
        assert!(matches!(err, GridError::TruncatedMap { expected: 3, got: 2 }));
    }

    #[test]
    fn reader_entry_point_matches_str() {
        let a = parse_map_str(SMALL_MAP).unwrap();
        let b = parse_map_reader(Cursor::new(SMALL_MAP)).unwrap();
        assert_eq!(a.height(), b.height());
        assert_eq!(a.width(), b.width());
        assert!(a.cells().all(|c| a.passable(c) == b.passable(c)));
    }
}
