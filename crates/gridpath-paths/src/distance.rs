use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for unit-cost 4-connected movement.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
