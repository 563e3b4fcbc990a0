use gridpath_core::Cell;

/// Errors reported by [`PathEngine::search`](crate::PathEngine::search).
///
/// An unreachable goal is not an error; it yields an empty
/// [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or goal lies outside the map.
    #[error("cell {0} is outside the search bounds")]
    OutOfBounds(Cell),
    /// The configured expansion budget ran out before the goal was reached.
    #[error("search budget exceeded after expanding {expanded} nodes")]
    BudgetExceeded { expanded: usize },
}
