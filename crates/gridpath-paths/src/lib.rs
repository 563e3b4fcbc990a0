//! Shortest-path search for grid-based games.
//!
//! The crate implements A\* over a 4-connected grid with unit step cost
//! ([`PathEngine::search`]). Maps plug in through two small traits:
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds and walkable neighbours |
//! | [`AstarPather`] : [`Pather`] | admissible distance estimate |
//!
//! The engine keeps no state between calls: every search allocates its own
//! node arena, so independent searches over a shared, read-only map can run
//! on different threads.
//!
//! "No path" is a normal outcome and is reported as an empty [`Path`].
//! Only invalid endpoints and an exhausted [`SearchConfig`] budget are
//! errors ([`SearchError`]).

mod astar;
mod blocked;
mod config;
mod distance;
mod engine;
mod error;
mod neighbors;
mod path;
mod traits;

pub use astar::search;
pub use blocked::Blocked;
pub use config::SearchConfig;
pub use distance::manhattan;
pub use engine::{PathEngine, STEP_COST};
pub use error::SearchError;
pub use neighbors::push_cardinal;
pub use path::Path;
pub use traits::{AstarPather, Pather};
