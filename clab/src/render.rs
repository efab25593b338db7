use std::{borrow::Cow, fmt::Display, fmt::Write as _};

use serde::{Deserialize, Serialize};

use crate::{array::Array2D, gameboard::Cell, Maze};

/// Characters used to draw each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub wall: char,
    pub path: char,
    pub solution: char,
    pub entrance: char,
    pub exit: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: '#',
            path: '*',
            solution: 'o',
            entrance: 'E',
            exit: 'S',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Wall => self.wall,
            Cell::Path => self.path,
            Cell::Solution => self.solution,
            Cell::Entrance => self.entrance,
            Cell::Exit => self.exit,
        }
    }
}

/// Lays out `cells` one row per line, every item followed by a single space.
pub fn layout<D: Display>(cells: &Array2D<Cell>, mut draw: impl FnMut(Cell) -> D) -> String {
    let mut out = String::with_capacity(cells.len() * 2 + cells.height());
    for row in cells.rows() {
        for &cell in row {
            // writing into a String can't fail
            let _ = write!(out, "{} ", draw(cell));
        }
        out.push('\n');
    }
    out
}

/// Plain text renderer.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    glyphs: Glyphs,
}

impl TextRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Renders the maze, optionally with its stored solution drawn over the path cells.
    pub fn render(&self, maze: &Maze, with_solution: bool) -> String {
        self.render_cells(&cells_to_draw(maze, with_solution))
    }

    pub fn render_cells(&self, cells: &Array2D<Cell>) -> String {
        layout(cells, |cell| self.glyphs.glyph(cell))
    }
}

/// The grid itself, or an overlay copy when the solution is requested.
pub fn cells_to_draw(maze: &Maze, with_solution: bool) -> Cow<'_, Array2D<Cell>> {
    if with_solution {
        Cow::Owned(maze.overlay())
    } else {
        Cow::Borrowed(maze.cells())
    }
}
