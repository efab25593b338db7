pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod render;

pub use gameboard::{normalize_size, Cell, GridError, Maze};
