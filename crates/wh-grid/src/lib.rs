//! `wh-grid` — passability grid, distance fields, and map input.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`grid`]  | `Grid` — immutable passability map, neighbor enumeration  |
//! | [`dist`]  | `DistTable` (BFS field), `DistCache` (memoised by target) |
//! | [`map`]   | Map text-format parsing (`height`/`width`/`map` header)   |
//! | [`error`] | `GridError`, `GridResult<T>`                              |

pub mod dist;
pub mod error;
pub mod grid;
pub mod map;

#[cfg(test)]
mod tests;

pub use dist::{DistCache, DistTable, INF};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use map::{load_map, parse_map_reader, parse_map_str};
