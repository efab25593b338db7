pub mod maze;
pub use maze::{normalize_size, GridError, Maze, MIN_SIZE};
pub mod cell;
pub use cell::{Cell, Way};
