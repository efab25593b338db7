use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{Carver, Params, Random};
use crate::{
    dims::Dims,
    gameboard::{Cell, Maze, Way},
};

/// Randomized iterative backtracker over the room lattice.
///
/// Rooms sit on odd coordinates, the cells between two neighbouring rooms are the walls that
/// get carved when the carver moves from one room to the other.
///
/// Params:
/// - `no_rng`: always take the first free direction (up, right, down, left)
#[derive(Debug)]
pub struct DepthFirstSearch;

impl Carver for DepthFirstSearch {
    fn carve(&self, maze: &mut Maze, rng: &mut Random, params: &Params) {
        let no_rng = params.parsed_or_warn("no_rng", false);

        let start = Dims(1, 1);
        maze.set(start, Cell::Path);

        let mut stack = Vec::with_capacity(maze.room_count());
        stack.push(start);
        let mut visited = 1;

        while let Some(&current) = stack.last() {
            let unvisited = Way::get_in_order()
                .into_iter()
                .filter(|way| {
                    let next = current + way.offset() * 2;
                    maze.is_room(next) && maze.get(next) == Cell::Wall
                })
                .collect::<SmallVec<[_; 4]>>();

            let chosen = if no_rng {
                unvisited.first()
            } else {
                unvisited.choose(rng)
            };

            match chosen {
                Some(way) => {
                    let next = current + way.offset() * 2;
                    maze.set(current + way.offset(), Cell::Path);
                    maze.set(next, Cell::Path);
                    stack.push(next);
                    visited += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        log::debug!("Carved {} of {} rooms", visited, maze.room_count());
    }
}
