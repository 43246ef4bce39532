//! Coordinator error type.

use thiserror::Error;

use wh_core::{Cell, ConfigError};
use wh_station::StationKind;

/// Errors detected while constructing a coordinator.
///
/// The tick loop itself is infallible: the planner's give-up path and the
/// unreachable-goal pinning policy are designed fallbacks, not errors.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("start set is empty")]
    NoAgents,

    #[error("start cell {0} is blocked")]
    BlockedStart(Cell),

    #[error("start cell {0} is assigned to two agents")]
    DuplicateStart(Cell),

    #[error("{kind} set is empty")]
    EmptyStationSet { kind: StationKind },

    #[error("{kind} cell {cell} is blocked")]
    BlockedStation { kind: StationKind, cell: Cell },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type SimResult<T> = Result<T, SimError>;
