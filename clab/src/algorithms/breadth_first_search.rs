use std::collections::VecDeque;

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::{Cell, Maze, Way},
};

/// Ordered positions from the entrance to the exit, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath(Vec<Dims>);

impl SolutionPath {
    pub fn positions(&self) -> &[Dims] {
        &self.0
    }

    /// Number of moves needed to walk the path.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// Finds the shortest path from the maze entrance to its exit.
///
/// Neighbours are expanded in [`Way::get_in_order`] order and the search stops as soon as the
/// exit is dequeued. Returns `None` when the exit can't be reached.
pub fn solve(maze: &Maze) -> Option<SolutionPath> {
    let size = maze.size();
    let (start, end) = (maze.start(), maze.end());

    let mut visited = Array2D::new(false, size, size);
    let mut parents: Array2D<Option<Dims>> = Array2D::new(None, size, size);
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Some(backtrack(&parents, end));
        }

        for way in Way::get_in_order() {
            let next = current + way.offset();
            let enterable = maze.get_cell(next).is_some_and(Cell::is_enterable);

            if enterable && !visited[next] {
                visited[next] = true;
                parents[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    log::debug!("No path from {:?} to {:?}", start, end);
    None
}

fn backtrack(parents: &Array2D<Option<Dims>>, end: Dims) -> SolutionPath {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = parents[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    SolutionPath(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a maze from rows of glyphs, `#` wall, `*` path, `E` entrance, `S` exit.
    fn parse(rows: &[&str]) -> Maze {
        let mut maze = Maze::new(rows.len()).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '*' => Cell::Path,
                    'E' => Cell::Entrance,
                    'S' => Cell::Exit,
                    _ => panic!("unknown glyph {ch}"),
                };
                maze.set(Dims(x as i32, y as i32), cell);
            }
        }
        maze
    }

    #[test]
    fn finds_shortest_of_two_routes() {
        let maze = parse(&[
            "E****", //
            "*###*", //
            "*###*", //
            "*###*", //
            "****S",
        ]);

        let path = solve(&maze).unwrap();
        assert_eq!(path.steps(), 8);
        assert_eq!(path.positions().first(), Some(&Dims(0, 0)));
        assert_eq!(path.positions().last(), Some(&Dims(4, 4)));
        // up/right/down/left order reaches (1,0) before (0,1)
        assert_eq!(path.positions()[1], Dims(1, 0));
    }

    #[test]
    fn prefers_the_shorter_branch() {
        let maze = parse(&[
            "E*###", //
            "**###", //
            "*#***", //
            "*#*#*", //
            "***#S",
        ]);

        let path = solve(&maze).unwrap();
        assert_eq!(path.steps(), 12);
        assert!(path.positions().contains(&Dims(2, 2)));
        assert!(!path.positions().contains(&Dims(1, 0)));
    }

    #[test]
    fn never_steps_back_into_entrance() {
        let maze = parse(&[
            "E*###", //
            "#####", //
            "#####", //
            "#####", //
            "####S",
        ]);

        assert_eq!(solve(&maze), None);
    }

    #[test]
    fn walls_block() {
        let maze = parse(&[
            "E*###", //
            "#*###", //
            "#####", //
            "###**", //
            "####S",
        ]);

        assert_eq!(solve(&maze), None);
    }
}
