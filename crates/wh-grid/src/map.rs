//! Map text-format parsing.
//!
//! # Format
//!
//! A header with `height H` and `width W` lines (either order, case
//! insensitive), a line consisting of `map`, then exactly H rows of at least
//! W characters:
//!
//! ```text
//! type octile
//! height 14
//! width 20
//! map
//! @@@@@@@@@@@@@@@@@@@@
//! @..................@
//! ...
//! ```
//!
//! | Characters            | Meaning  |
//! |-----------------------|----------|
//! | `.` `G` `S` `T` space | passable |
//! | `@` and anything else | blocked  |
//!
//! Rows shorter than W are rejected; characters beyond column W-1 are
//! ignored.  Header lines other than `height`/`width`/`map` (e.g. `type`)
//! are skipped.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use wh_core::Cell;

use crate::{Grid, GridError, GridResult};

/// `true` for the characters that denote a passable cell.
#[inline]
fn passable_char(ch: char) -> bool {
    matches!(ch, '.' | 'G' | 'S' | 'T' | ' ')
}

/// Load a grid from a map file on disk.
pub fn load_map(path: &Path) -> GridResult<Grid> {
    let file = std::fs::File::open(path)?;
    parse_map_reader(file)
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded map strings.
pub fn parse_map_reader<R: Read>(reader: R) -> GridResult<Grid> {
    let mut lines = Vec::new();
    for line in BufReader::new(reader).lines() {
        lines.push(line?);
    }
    parse_lines(&lines)
}

/// Parse a grid from an in-memory map string.
pub fn parse_map_str(s: &str) -> GridResult<Grid> {
    let lines: Vec<String> = s.lines().map(str::to_owned).collect();
    parse_lines(&lines)
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn parse_lines(lines: &[String]) -> GridResult<Grid> {
    let mut width:  Option<usize> = None;
    let mut height: Option<usize> = None;
    let mut body_start = None;

    // ── Header ────────────────────────────────────────────────────────────
    for (i, line) in lines.iter().enumerate() {
        let s = line.trim().to_ascii_lowercase();
        if let Some(rest) = s.strip_prefix("width") {
            width = rest.trim().parse().ok();
        } else if let Some(rest) = s.strip_prefix("height") {
            height = rest.trim().parse().ok();
        } else if s == "map" {
            body_start = Some(i + 1);
            break;
        }
    }

    let width  = width.ok_or(GridError::MissingHeader("width"))?;
    let height = height.ok_or(GridError::MissingHeader("height"))?;
    let body_start = body_start.ok_or(GridError::MissingHeader("map"))?;
    if width == 0 || height == 0 {
        return Err(GridError::EmptyMap);
    }
    if width >= u16::MAX as usize || height >= u16::MAX as usize {
        return Err(GridError::MapTooLarge { height, width });
    }

    // ── Body ──────────────────────────────────────────────────────────────
    let body = &lines[body_start..];
    if body.len() < height {
        return Err(GridError::TruncatedMap { expected: height, got: body.len() });
    }

    let mut passable = vec![false; height * width];
    for (row, line) in body[..height].iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < width {
            return Err(GridError::RowTooShort {
                row,
                got:      chars.len(),
                expected: width,
            });
        }
        for (col, &ch) in chars[..width].iter().enumerate() {
            passable[row * width + col] = passable_char(ch);
        }
    }

    Ok(Grid::from_fn(height as u16, width as u16, |c: Cell| {
        passable[c.row as usize * width + c.col as usize]
    }))
}
