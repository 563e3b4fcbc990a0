use gridpath_core::Cell;

/// An ordered route from start to goal, both inclusive.
///
/// An empty path means the goal is unreachable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// The "no path" result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cells in walking order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the search found no route.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, i.e. `len() - 1` for a non-empty path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Last cell, if any.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether the route passes through `c`.
    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    /// Iterate over the cells in walking order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The route as plain `(x, y)` pairs.
    pub fn to_coords(&self) -> Vec<(i32, i32)> {
        self.cells.iter().map(|&c| c.into()).collect()
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
