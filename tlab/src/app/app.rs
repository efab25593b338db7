use std::io::{BufRead, Write};

use clab::algorithms::Generator;

use super::{input, AppError};
use crate::{
    constants::{NO_SOLUTION, PROMPT, SEPARATOR},
    renderer::MazeRenderer,
    settings::Settings,
};

/// Result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { size: usize, steps: usize },
    Unsolved { size: usize },
}

/// One prompt, generate, solve, print cycle.
#[derive(Debug, Default)]
pub struct App {
    settings: Settings,
    generator: Generator,
    size: Option<i64>,
    seed: Option<u64>,
    color: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let generator = Generator::default().with_params(settings.get_generator_params());

        Self {
            settings,
            generator,
            ..Default::default()
        }
    }

    /// Replaces the generator built from the settings, params included.
    pub fn generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    /// Skip the prompt and use this size instead.
    pub fn size(mut self, size: Option<i64>) -> Self {
        self.size = size;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn run(&self, reader: &mut impl BufRead, out: &mut impl Write) -> Result<Outcome, AppError> {
        let requested = match self.size {
            Some(size) => size,
            None => {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
                input::read_size(reader)?
            }
        };
        let size = input::coerce_size(requested);

        let mut maze = self.generator.generate(size, self.seed)?;
        let renderer = MazeRenderer::from_settings(&self.settings, self.color);

        writeln!(out)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "GENERATED MAZE ({size}x{size}):")?;
        writeln!(out)?;
        write!(out, "{}", renderer.render(&maze, false))?;
        writeln!(out, "{}", SEPARATOR)?;

        if !maze.solve() {
            log::warn!("Maze {size}x{size} has no solution");
            writeln!(out)?;
            writeln!(out, "{}", NO_SOLUTION)?;
            return Ok(Outcome::Unsolved { size });
        }

        writeln!(out)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "SOLUTION FOUND:")?;
        writeln!(out)?;
        write!(out, "{}", renderer.render(&maze, true))?;
        writeln!(out, "{}", SEPARATOR)?;

        let steps = maze.solution().map_or(0, |path| path.steps());
        log::info!("Solved {size}x{size} maze in {steps} steps");

        Ok(Outcome::Solved { size, steps })
    }
}
