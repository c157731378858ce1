//! Maze generation for wayfind grids.

pub mod backtracker;

pub use backtracker::{MazeGen, generate_maze};
