//! **gridpath-core** — geometry shared by the gridpath crates.
//!
//! A [`Cell`] is an integer grid coordinate and a [`Bounds`] is the
//! half-open rectangle a grid occupies. Both are small `Copy` values with
//! structural equality and hashing.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Cell};
