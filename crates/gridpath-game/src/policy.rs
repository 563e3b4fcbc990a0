//! Request handling shared by [`GameSession`](crate::GameSession) and
//! [`SharedSession`](crate::SharedSession).
//!
//! Both types lock or borrow the parts they need and then defer here, so the
//! facade decision table lives in one place.

use std::collections::HashSet;

use gridpath_core::Cell;
use gridpath_paths::{Blocked, Path, PathEngine};
use log::{debug, trace};

use crate::error::{GridError, SessionError};
use crate::grid::GridMap;
use crate::registry::OccupantRegistry;

/// Set or clear the obstacle on `cell`. Off-board cells are dropped.
pub(crate) fn edit_obstacle(grid: &mut GridMap, cell: Cell, blocked: bool) -> bool {
    let res = if blocked {
        grid.set_obstacle(cell)
    } else {
        grid.clear_obstacle(cell)
    };
    match res {
        Ok(()) => true,
        Err(err) => {
            let op = if blocked { "place_obstacle" } else { "clear_obstacle" };
            debug!("{op} ignored: {err}");
            false
        }
    }
}

/// Register `id` on an on-board cell.
pub(crate) fn add_occupant(
    grid: &GridMap,
    occupants: &mut OccupantRegistry,
    id: String,
    cell: Cell,
) -> Result<(), SessionError> {
    if !grid.is_in_bounds(cell) {
        return Err(GridError::OutOfBounds(cell).into());
    }
    occupants.add(id, cell)?;
    Ok(())
}

/// Move `id` to `cell`, or drop the request if the cell is off the board,
/// impassable, or (with `exclusive`) held by another occupant.
pub(crate) fn move_occupant(
    grid: &GridMap,
    occupants: &mut OccupantRegistry,
    exclusive: bool,
    id: &str,
    cell: Cell,
) -> Result<bool, SessionError> {
    let from = occupants.position_of(id)?;
    if !grid.walkable(cell) {
        debug!("move_occupant ignored: {id:?} cannot stand on {cell}");
        return Ok(false);
    }
    if exclusive {
        if let Some(holder) = occupants.occupant_at(cell).filter(|&o| o != id) {
            debug!("move_occupant ignored: {cell} is held by {holder:?}");
            return Ok(false);
        }
    }
    occupants.move_to(id, cell)?;
    trace!("move_occupant: {id:?} {from} -> {cell}");
    Ok(true)
}

/// Search from `start` to `goal`, treating `others` as blocked when given.
pub(crate) fn route(
    engine: &PathEngine,
    grid: &GridMap,
    others: Option<&HashSet<Cell>>,
    start: Cell,
    goal: Cell,
) -> Result<Path, SessionError> {
    let path = match others {
        Some(others) => {
            let pather = Blocked::new(grid, |c| others.contains(&c));
            engine.search(&pather, start, goal)?
        }
        None => engine.search(grid, start, goal)?,
    };
    Ok(path)
}
