//! Terminal front end for wayfind: an editing [`Board`] and a renderer.

pub mod board;
pub mod cli;
pub mod render;

pub use board::{Board, Status};
pub use cli::Cli;
pub use render::render;
