//! Game-session layer for gridpath.
//!
//! - [`GridMap`]: fixed-size obstacle map, strict about bounds.
//! - [`OccupantRegistry`]: named units and their cells.
//! - [`GameSession`]: the facade a host application drives. It validates
//!   input, silently drops obstacle and movement requests that cannot apply,
//!   and surfaces unknown or duplicate occupants as errors.
//! - [`SharedSession`]: the same operations behind locks, for hosts that
//!   search from several threads.

pub mod config;
pub mod error;
pub mod grid;
mod policy;
pub mod registry;
mod render;
pub mod session;
pub mod shared;

pub use config::SessionConfig;
pub use error::{GridError, RegistryError, SessionError};
pub use grid::GridMap;
pub use registry::OccupantRegistry;
pub use session::GameSession;
pub use shared::SharedSession;

pub use gridpath_core::{Bounds, Cell};
pub use gridpath_paths::{Path, SearchConfig, SearchError};
