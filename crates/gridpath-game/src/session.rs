//! The facade a host application drives.
//!
//! [`GameSession`] composes a [`GridMap`], an [`OccupantRegistry`] and a
//! [`PathEngine`]. Lower layers are strict; the facade decides per operation
//! whether a violation is surfaced or absorbed:
//!
//! | Operation | Out of bounds | Impassable target | Unknown id | Duplicate id |
//! |---|---|---|---|---|
//! | [`place_obstacle`](GameSession::place_obstacle) | ignored | — | — | — |
//! | [`clear_obstacle`](GameSession::clear_obstacle) | ignored | — | — | — |
//! | [`add_occupant`](GameSession::add_occupant) | error | allowed | — | error |
//! | [`move_occupant`](GameSession::move_occupant) | ignored | ignored | error | — |
//! | [`find_path`](GameSession::find_path) | error | empty path | error | — |
//!
//! Ignored requests leave the session untouched and are logged at debug
//! level.

use gridpath_core::Cell;
use gridpath_paths::{Path, PathEngine};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::grid::GridMap;
use crate::policy;
use crate::registry::OccupantRegistry;

/// A board with obstacles and named occupants that can request paths.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    grid: GridMap,
    occupants: OccupantRegistry,
    engine: PathEngine,
}

impl GameSession {
    /// Session on an empty `width` × `height` board with default settings.
    pub fn new(width: i32, height: i32) -> Result<Self, SessionError> {
        Self::with_config(SessionConfig::new(width, height))
    }

    /// Session built from explicit settings.
    pub fn with_config(config: SessionConfig) -> Result<Self, SessionError> {
        let grid = GridMap::new(config.width, config.height)?;
        Ok(Self {
            config,
            grid,
            occupants: OccupantRegistry::new(),
            engine: PathEngine::with_config(config.search),
        })
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read-only view of the obstacle map.
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// Read-only view of the occupants.
    pub fn occupants(&self) -> &OccupantRegistry {
        &self.occupants
    }

    /// Mark a cell impassable. Returns `false` (and changes nothing) if the
    /// cell is off the board.
    pub fn place_obstacle(&mut self, cell: impl Into<Cell>) -> bool {
        policy::edit_obstacle(&mut self.grid, cell.into(), true)
    }

    /// Make a cell passable again. Returns `false` if the cell is off the
    /// board.
    pub fn clear_obstacle(&mut self, cell: impl Into<Cell>) -> bool {
        policy::edit_obstacle(&mut self.grid, cell.into(), false)
    }

    /// Register a new occupant. The cell must be on the board but need not
    /// be passable.
    pub fn add_occupant(
        &mut self,
        id: impl Into<String>,
        cell: impl Into<Cell>,
    ) -> Result<(), SessionError> {
        policy::add_occupant(&self.grid, &mut self.occupants, id.into(), cell.into())
    }

    /// Unregister an occupant, returning its last position.
    pub fn remove_occupant(&mut self, id: &str) -> Result<Cell, SessionError> {
        Ok(self.occupants.remove(id)?)
    }

    /// Current position of `id`.
    pub fn position_of(&self, id: &str) -> Result<Cell, SessionError> {
        Ok(self.occupants.position_of(id)?)
    }

    /// Move `id` to `cell` if the cell is on the board and passable (and,
    /// with exclusive occupancy, not held by someone else).
    ///
    /// Returns `Ok(true)` when the move was applied and `Ok(false)` when it
    /// was dropped. An unknown occupant is an error.
    pub fn move_occupant(&mut self, id: &str, cell: impl Into<Cell>) -> Result<bool, SessionError> {
        policy::move_occupant(
            &self.grid,
            &mut self.occupants,
            self.config.exclusive_occupancy,
            id,
            cell.into(),
        )
    }

    /// Shortest path from the current position of `id` to `goal`.
    ///
    /// An empty path means the goal is unreachable. With exclusive
    /// occupancy, cells held by other occupants count as blocked.
    pub fn find_path(&self, id: &str, goal: impl Into<Cell>) -> Result<Path, SessionError> {
        let start = self.occupants.position_of(id)?;
        let others = self
            .config
            .exclusive_occupancy
            .then(|| self.occupants.cells_except(id));
        policy::route(&self.engine, &self.grid, others.as_ref(), start, goal.into())
    }

    /// Text picture of the board, one row per line: `.` floor, `#` obstacle,
    /// and the first letter of each occupant's identifier on its cell.
    pub fn render(&self) -> String {
        crate::render::render_board(&self.grid, &self.occupants)
    }

    pub(crate) fn from_parts(
        config: SessionConfig,
        grid: GridMap,
        occupants: OccupantRegistry,
    ) -> Self {
        Self {
            config,
            grid,
            occupants,
            engine: PathEngine::with_config(config.search),
        }
    }

    pub(crate) fn into_parts(self) -> (SessionConfig, GridMap, OccupantRegistry) {
        (self.config, self.grid, self.occupants)
    }
}
