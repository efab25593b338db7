use serde::{Deserialize, Serialize};

use crate::dims::Dims;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Wall,
    Path,
    Entrance,
    Exit,
    /// Marks a path cell that lies on the solution, only used in render overlays.
    Solution,
}

impl Cell {
    /// Whether a walker may stand on this cell.
    pub fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Whether the solver may step *into* this cell. The entrance is only ever a start.
    pub fn is_enterable(self) -> bool {
        matches!(self, Cell::Path | Cell::Exit)
    }
}

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Way {
    Up,
    Right,
    Down,
    Left,
}

impl Way {
    /// Fixed enumeration order used by both the carver and the solver.
    pub fn get_in_order() -> [Way; 4] {
        [Way::Up, Way::Right, Way::Down, Way::Left]
    }

    pub fn offset(&self) -> Dims {
        match self {
            Self::Up => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Down => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversability() {
        assert!(!Cell::Wall.is_open());
        assert!(Cell::Entrance.is_open());
        assert!(Cell::Path.is_enterable());
        assert!(Cell::Exit.is_enterable());
        assert!(!Cell::Entrance.is_enterable());
        assert!(!Cell::Wall.is_enterable());
    }

    #[test]
    fn ways_are_unit_steps_in_order() {
        let offsets: Vec<_> = Way::get_in_order().iter().map(Way::offset).collect();
        assert_eq!(offsets, vec![Dims(0, -1), Dims(1, 0), Dims(0, 1), Dims(-1, 0)]);
    }
}
