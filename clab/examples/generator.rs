use std::env;

use clab::{normalize_size, render::TextRenderer, Maze};
use rand::{thread_rng, Rng as _};

fn main() {
    let args = env::args()
        .skip(1)
        .take(2)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 1 || args.len() == 2,
        "Expected size and optional seed"
    );

    let input_seed = args.get(1).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let size = normalize_size(args[0]);
    let mut maze = Maze::generate(size, Some(seed)).unwrap();
    let solved = maze.solve();

    let renderer = TextRenderer::default();
    print!("{}", renderer.render(&maze, solved));
}
