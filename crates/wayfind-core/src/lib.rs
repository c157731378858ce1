//! **wayfind-core** — grid model shared by the wayfind crates.
//!
//! This crate provides the foundational types used by the maze generator
//! and the pathfinder: integer geometry with a Euclidean distance
//! primitive, the four-state [`Cell`] enum, and the caller-owned [`Grid`].

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, dist};
pub use grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid};
