use gridpath_core::Cell;

/// Append the orthogonal neighbours of `c` for which `keep` returns `true`.
///
/// Neighbours are visited in [`Cell::ORTHOGONAL`] order, which fixes the
/// expansion order of the search and therefore its tie-breaking.
#[inline]
pub fn push_cardinal(c: Cell, buf: &mut Vec<Cell>, keep: impl Fn(Cell) -> bool) {
    for n in c.neighbors_4() {
        if keep(n) {
            buf.push(n);
        }
    }
}
