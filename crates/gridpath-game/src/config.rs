//! Session settings.

use gridpath_paths::SearchConfig;

/// Settings for a [`GameSession`](crate::GameSession).
///
/// The default is the 10 × 10 board with an unbounded search and shared
/// cells allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Grid width in cells. Must be positive.
    pub width: i32,
    /// Grid height in cells. Must be positive.
    pub height: i32,
    /// Settings forwarded to the path engine.
    pub search: SearchConfig,
    /// When `true`, no two occupants may share a cell: paths route around
    /// other occupants and moves onto an occupied cell are dropped.
    pub exclusive_occupancy: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            search: SearchConfig::default(),
            exclusive_occupancy: false,
        }
    }
}

impl SessionConfig {
    /// Default settings for a `width` × `height` board.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_exclusive_occupancy(mut self, exclusive: bool) -> Self {
        self.exclusive_occupancy = exclusive;
        self
    }
}
