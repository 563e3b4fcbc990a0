//! The obstacle map.
//!
//! [`GridMap`] owns a dense row-major passability table. Every query and
//! mutation is bounds-checked: out-of-range cells are rejected with
//! [`GridError::OutOfBounds`], never clamped.

use gridpath_core::{Bounds, Cell};
use gridpath_paths::{AstarPather, Pather, manhattan, push_cardinal};

use crate::error::GridError;

/// A fixed-size grid of passable / impassable cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    bounds: Bounds,
    /// `true` for impassable cells, indexed by `bounds.index_of`.
    blocked: Vec<bool>,
}

impl GridMap {
    /// Create a `width` × `height` grid with every cell passable.
    ///
    /// Fails with [`GridError::TooLarge`] when the cell table cannot be
    /// allocated.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let too_large = GridError::TooLarge { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(too_large.clone())?;
        let mut blocked = Vec::new();
        blocked.try_reserve_exact(len).map_err(|_| too_large)?;
        blocked.resize(len, false);
        Ok(Self {
            bounds: Bounds::with_size(width, height),
            blocked,
        })
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `c` lies on the grid.
    #[inline]
    pub fn is_in_bounds(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` can be walked on. Out-of-range cells are an error, not
    /// `false`.
    pub fn is_passable(&self, c: Cell) -> Result<bool, GridError> {
        let idx = self.index(c)?;
        Ok(!self.blocked[idx])
    }

    /// Mark `c` impassable. Placing the same obstacle twice is harmless.
    pub fn set_obstacle(&mut self, c: Cell) -> Result<(), GridError> {
        let idx = self.index(c)?;
        self.blocked[idx] = true;
        Ok(())
    }

    /// Mark `c` passable again.
    pub fn clear_obstacle(&mut self, c: Cell) -> Result<(), GridError> {
        let idx = self.index(c)?;
        self.blocked[idx] = false;
        Ok(())
    }

    /// Number of impassable cells.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Impassable cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| self.bounds.cell_at(i))
    }

    /// In bounds and passable; never fails.
    #[inline]
    pub(crate) fn walkable(&self, c: Cell) -> bool {
        self.bounds.index_of(c).is_some_and(|i| !self.blocked[i])
    }

    #[inline]
    fn index(&self, c: Cell) -> Result<usize, GridError> {
        self.bounds.index_of(c).ok_or(GridError::OutOfBounds(c))
    }
}

impl Pather for GridMap {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        push_cardinal(c, buf, |n| self.walkable(n));
    }
}

impl AstarPather for GridMap {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}
