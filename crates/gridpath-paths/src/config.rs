/// Search settings.
///
/// The default is unbounded: the search runs until it reaches the goal or
/// exhausts the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up with
    /// [`SearchError::BudgetExceeded`](crate::SearchError::BudgetExceeded).
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Unbounded search.
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Cap the number of expanded nodes.
    pub const fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}
