//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `wh-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("map has zero width or height")]
    EmptyMap,

    #[error("map is {height}x{width}, beyond the supported coordinate range")]
    MapTooLarge { height: usize, width: usize },

    #[error("map header is missing the `{0}` field")]
    MissingHeader(&'static str),

    #[error("map body ended after {got} of {expected} rows")]
    TruncatedMap { expected: usize, got: usize },

    #[error("map row {row} has {got} characters, expected at least {expected}")]
    RowTooShort { row: usize, got: usize, expected: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
