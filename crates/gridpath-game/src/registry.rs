//! Named occupants and their positions.
//!
//! The registry knows nothing about the map: bounds and passability are
//! checked by the caller before it adds or moves anyone.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

use gridpath_core::Cell;

use crate::error::RegistryError;

/// Mapping from occupant identifier to current cell.
///
/// Iteration is ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupantRegistry {
    positions: BTreeMap<String, Cell>,
}

impl OccupantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new occupant at `cell`.
    pub fn add(&mut self, id: impl Into<String>, cell: Cell) -> Result<(), RegistryError> {
        match self.positions.entry(id.into()) {
            Entry::Occupied(e) => Err(RegistryError::DuplicateOccupant(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(cell);
                Ok(())
            }
        }
    }

    /// Overwrite the position of an existing occupant.
    pub fn move_to(&mut self, id: &str, cell: Cell) -> Result<(), RegistryError> {
        let pos = self
            .positions
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownOccupant(id.to_string()))?;
        *pos = cell;
        Ok(())
    }

    /// Current cell of `id`.
    pub fn position_of(&self, id: &str) -> Result<Cell, RegistryError> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| RegistryError::UnknownOccupant(id.to_string()))
    }

    /// Unregister `id`, returning its last position.
    pub fn remove(&mut self, id: &str) -> Result<Cell, RegistryError> {
        self.positions
            .remove(id)
            .ok_or_else(|| RegistryError::UnknownOccupant(id.to_string()))
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// First occupant (by identifier) standing on `cell`.
    pub fn occupant_at(&self, cell: Cell) -> Option<&str> {
        self.iter().find(|&(_, c)| c == cell).map(|(id, _)| id)
    }

    /// Cells held by every occupant other than `id`.
    pub fn cells_except(&self, id: &str) -> HashSet<Cell> {
        self.iter()
            .filter(|&(other, _)| other != id)
            .map(|(_, c)| c)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `(identifier, cell)` pairs ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Cell)> + '_ {
        self.positions.iter().map(|(id, &c)| (id.as_str(), c))
    }
}
