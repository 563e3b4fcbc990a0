//! Error types for each layer.

use gridpath_core::Cell;
use gridpath_paths::SearchError;

/// Contract violations reported by [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid size {width}x{height}: both dimensions must be positive")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("grid size {width}x{height} is too large to allocate")]
    TooLarge { width: i32, height: i32 },
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),
}

/// Contract violations reported by
/// [`OccupantRegistry`](crate::OccupantRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("occupant {0:?} already exists")]
    DuplicateOccupant(String),
    #[error("unknown occupant {0:?}")]
    UnknownOccupant(String),
}

/// Errors surfaced by [`GameSession`](crate::GameSession) and
/// [`SharedSession`](crate::SharedSession).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl SessionError {
    /// Whether this error reports a missing occupant.
    pub fn is_unknown_occupant(&self) -> bool {
        matches!(self, Self::Registry(RegistryError::UnknownOccupant(_)))
    }
}
