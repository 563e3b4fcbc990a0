use gridpath_core::{Bounds, Cell};

/// Minimal pathfinding interface: the searchable area and its moves.
pub trait Pather {
    /// Rectangle the search is confined to. Endpoints outside it are
    /// rejected.
    fn bounds(&self) -> Bounds;

    /// Append the cells reachable in one step from `c` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with an admissible heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}
