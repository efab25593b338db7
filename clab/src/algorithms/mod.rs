pub mod breadth_first_search;
mod depth_first_search;
mod params;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::gameboard::{GridError, Maze};

pub use breadth_first_search::SolutionPath;
pub use depth_first_search::DepthFirstSearch;
pub use params::Params;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a freshly created, all-wall maze.
pub trait Carver: fmt::Debug {
    fn carve(&self, maze: &mut Maze, rng: &mut Random, params: &Params);
}

#[derive(Debug)]
pub struct Generator {
    carver: Box<dyn Carver>,
    params: Params,
}

impl Generator {
    pub fn new(carver: Box<dyn Carver>) -> Self {
        Self {
            carver,
            params: Params::new(),
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Generates a maze of the given size.
    ///
    /// Without a seed, one is drawn from the thread RNG, so every run differs.
    pub fn generate(&self, size: usize, seed: Option<u64>) -> Result<Maze, GridError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        log::debug!("Generating {size}x{size} maze with seed {seed}");

        let mut rng = Random::seed_from_u64(seed);
        let mut maze = Maze::new(size)?;

        self.carver.carve(&mut maze, &mut rng, &self.params);
        maze.open_corners();

        Ok(maze)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Box::new(DepthFirstSearch))
    }
}
