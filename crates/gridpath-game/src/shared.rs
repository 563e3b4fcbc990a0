//! Thread-safe session.
//!
//! The map sits behind a read-write lock: searches hold a read guard for
//! their whole run, obstacle edits take the write guard. Occupants sit
//! behind one mutex. When both are needed the map is locked first.

use gridpath_core::Cell;
use gridpath_paths::{Path, PathEngine};
use parking_lot::{Mutex, RwLock};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::grid::GridMap;
use crate::policy;
use crate::registry::OccupantRegistry;
use crate::session::GameSession;

/// [`GameSession`] operations usable through `&self` from many threads.
///
/// Policies match [`GameSession`] exactly.
#[derive(Debug)]
pub struct SharedSession {
    config: SessionConfig,
    engine: PathEngine,
    grid: RwLock<GridMap>,
    occupants: Mutex<OccupantRegistry>,
}

impl SharedSession {
    pub fn new(width: i32, height: i32) -> Result<Self, SessionError> {
        Self::with_config(SessionConfig::new(width, height))
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, SessionError> {
        Ok(Self::from(GameSession::with_config(config)?))
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// See [`GameSession::place_obstacle`].
    pub fn place_obstacle(&self, cell: impl Into<Cell>) -> bool {
        policy::edit_obstacle(&mut self.grid.write(), cell.into(), true)
    }

    /// See [`GameSession::clear_obstacle`].
    pub fn clear_obstacle(&self, cell: impl Into<Cell>) -> bool {
        policy::edit_obstacle(&mut self.grid.write(), cell.into(), false)
    }

    /// See [`GameSession::add_occupant`].
    pub fn add_occupant(
        &self,
        id: impl Into<String>,
        cell: impl Into<Cell>,
    ) -> Result<(), SessionError> {
        let grid = self.grid.read();
        policy::add_occupant(&grid, &mut self.occupants.lock(), id.into(), cell.into())
    }

    /// See [`GameSession::remove_occupant`].
    pub fn remove_occupant(&self, id: &str) -> Result<Cell, SessionError> {
        Ok(self.occupants.lock().remove(id)?)
    }

    /// See [`GameSession::position_of`].
    pub fn position_of(&self, id: &str) -> Result<Cell, SessionError> {
        Ok(self.occupants.lock().position_of(id)?)
    }

    /// See [`GameSession::move_occupant`].
    pub fn move_occupant(&self, id: &str, cell: impl Into<Cell>) -> Result<bool, SessionError> {
        let grid = self.grid.read();
        policy::move_occupant(
            &grid,
            &mut self.occupants.lock(),
            self.config.exclusive_occupancy,
            id,
            cell.into(),
        )
    }

    /// See [`GameSession::find_path`]. The occupant table is only locked
    /// while reading positions; the map stays read-locked for the search.
    pub fn find_path(&self, id: &str, goal: impl Into<Cell>) -> Result<Path, SessionError> {
        let (start, others) = {
            let occupants = self.occupants.lock();
            let start = occupants.position_of(id)?;
            let others = self
                .config
                .exclusive_occupancy
                .then(|| occupants.cells_except(id));
            (start, others)
        };
        let grid = self.grid.read();
        policy::route(&self.engine, &grid, others.as_ref(), start, goal.into())
    }

    /// Copy of the current state as a plain session.
    pub fn snapshot(&self) -> GameSession {
        let grid = self.grid.read().clone();
        let occupants = self.occupants.lock().clone();
        GameSession::from_parts(self.config, grid, occupants)
    }

    /// See [`GameSession::render`].
    pub fn render(&self) -> String {
        let grid = self.grid.read();
        let occupants = self.occupants.lock();
        crate::render::render_board(&grid, &occupants)
    }

    /// Unwrap into a plain session.
    pub fn into_session(self) -> GameSession {
        GameSession::from_parts(self.config, self.grid.into_inner(), self.occupants.into_inner())
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        let (config, grid, occupants) = session.into_parts();
        Self {
            config,
            engine: PathEngine::with_config(config.search),
            grid: RwLock::new(grid),
            occupants: Mutex::new(occupants),
        }
    }
}
