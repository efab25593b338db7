use thiserror::Error;

use crate::{
    algorithms::{breadth_first_search, Generator, SolutionPath},
    array::Array2D,
    dims::Dims,
    gameboard::cell::{Cell, Way},
};

/// Smallest accepted side length.
pub const MIN_SIZE: usize = 5;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid maze size {}, expected an odd number >= {}", .0, MIN_SIZE)]
    InvalidSize(usize),
}

/// Coerces a requested side length into a valid one.
///
/// Sizes below [`MIN_SIZE`] are clamped, even sizes are rounded up to the next odd number.
pub fn normalize_size(requested: i64) -> usize {
    let size = usize::try_from(requested.max(MIN_SIZE as i64)).unwrap_or(usize::MAX);
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Odd, at least [`MIN_SIZE`], and small enough that every cell has an `i32` coordinate
/// and the cell count fits in `usize`.
pub fn is_valid_size(size: usize) -> bool {
    size >= MIN_SIZE
        && size % 2 == 1
        && i32::try_from(size).is_ok()
        && size.checked_mul(size).is_some()
}

/// Square maze grid together with its fixed entrance, exit and last found solution.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) start: Dims,
    pub(crate) end: Dims,
    pub(crate) solution: Option<SolutionPath>,
}

impl Maze {
    /// Creates a maze of `size`×`size` cells, all of them walls.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !is_valid_size(size) {
            return Err(GridError::InvalidSize(size));
        }

        let last = size as i32 - 1;
        Ok(Maze {
            cells: Array2D::new(Cell::Wall, size, size),
            start: Dims(0, 0),
            end: Dims(last, last),
            solution: None,
        })
    }

    /// Creates a maze and carves it with the default generator.
    pub fn generate(size: usize, seed: Option<u64>) -> Result<Self, GridError> {
        Generator::default().generate(size, seed)
    }

    pub fn size(&self) -> usize {
        self.cells.width()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    pub fn get(&self, pos: Dims) -> Cell {
        self.cells[pos]
    }

    /// # Panics
    /// If `pos` is out of bounds.
    pub fn set(&mut self, pos: Dims, cell: Cell) {
        self.cells[pos] = cell;
    }

    pub fn get_cell(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    /// Is `pos` one of the carving nodes, (1,1), (1,3), ...
    pub fn is_room(&self, pos: Dims) -> bool {
        pos.all_odd() && self.is_in_bounds(pos)
    }

    pub fn rooms(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos().filter(|&pos| self.is_room(pos))
    }

    pub fn room_count(&self) -> usize {
        let per_side = self.size() / 2;
        per_side * per_side
    }

    /// Counts carved connections between horizontally or vertically adjacent rooms.
    pub fn open_room_edges(&self) -> usize {
        self.rooms()
            .flat_map(|room| [Way::Right, Way::Down].map(|way| (room, way)))
            .filter(|&(room, way)| {
                let other = room + way.offset() * 2;
                self.is_room(other) && self.get(room + way.offset()).is_open()
            })
            .count()
    }

    /// Marks the corners as entrance and exit and opens their inner neighbours,
    /// so both corners join the room lattice.
    pub(crate) fn open_corners(&mut self) {
        let (start, end) = (self.start, self.end);

        self.set(start, Cell::Entrance);
        self.set(end, Cell::Exit);

        self.set(start + Way::Right.offset(), Cell::Path);
        self.set(start + Way::Down.offset(), Cell::Path);
        self.set(end + Way::Left.offset(), Cell::Path);
        self.set(end + Way::Up.offset(), Cell::Path);
    }

    /// Searches the shortest way from the entrance to the exit and stores it,
    /// replacing any previous solution.
    ///
    /// Returns whether a path was found.
    pub fn solve(&mut self) -> bool {
        self.solution = breadth_first_search::solve(self);
        self.solution.is_some()
    }

    pub fn solution(&self) -> Option<&SolutionPath> {
        self.solution.as_ref()
    }

    /// Copy of the grid with the stored solution drawn over plain path cells.
    pub fn overlay(&self) -> Array2D<Cell> {
        let mut cells = self.cells.clone();
        if let Some(solution) = &self.solution {
            for &pos in solution.positions() {
                if cells[pos] == Cell::Path {
                    cells[pos] = Cell::Solution;
                }
            }
        }
        cells
    }
}
