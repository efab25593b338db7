use clab::{
    algorithms::{DepthFirstSearch, Generator, Params},
    dims::Dims,
    render::TextRenderer,
    Maze,
};

fn ordered_generator() -> Generator {
    Generator::new(Box::new(DepthFirstSearch)).with_params(Params::new().with("no_rng", "true"))
}

#[test]
fn ordered_five_by_five() {
    let mut maze = ordered_generator().generate(5, Some(0)).unwrap();
    let renderer = TextRenderer::default();

    assert_eq!(
        renderer.render(&maze, false),
        "E * # # # \n\
         * * * * # \n\
         # # # * # \n\
         # * * * * \n\
         # # # * S \n"
    );

    assert!(maze.solve());
    assert_eq!(
        maze.solution().unwrap().positions(),
        &[
            Dims(0, 0),
            Dims(1, 0),
            Dims(1, 1),
            Dims(2, 1),
            Dims(3, 1),
            Dims(3, 2),
            Dims(3, 3),
            Dims(4, 3),
            Dims(4, 4),
        ]
    );

    assert_eq!(
        renderer.render(&maze, true),
        "E o # # # \n\
         * o o o # \n\
         # # # o # \n\
         # * * o o \n\
         # # # * S \n"
    );
}

#[test]
fn ordered_generation_ignores_seed() {
    let a = ordered_generator().generate(11, Some(1)).unwrap();
    let b = ordered_generator().generate(11, Some(2)).unwrap();
    assert_eq!(a.cells(), b.cells());
}

#[test]
fn same_seed_same_output() {
    let renderer = TextRenderer::default();

    for size in [5, 7, 21] {
        let mut a = Maze::generate(size, Some(0xC0FFEE)).unwrap();
        let mut b = Maze::generate(size, Some(0xC0FFEE)).unwrap();
        assert!(a.solve());
        assert!(b.solve());

        assert_eq!(renderer.render(&a, false), renderer.render(&b, false));
        assert_eq!(renderer.render(&a, true), renderer.render(&b, true));
        assert_eq!(a.solution(), b.solution());
    }
}

#[test]
fn five_by_five_is_one_of_four_trees() {
    // The 2x2 room lattice has exactly four spanning trees, one per missing edge.
    let missing_edges = [Dims(2, 1), Dims(1, 2), Dims(3, 2), Dims(2, 3)];

    for seed in 0..32 {
        let maze = Maze::generate(5, Some(seed)).unwrap();
        let closed: Vec<_> = missing_edges
            .iter()
            .filter(|&&pos| !maze.get(pos).is_open())
            .collect();
        assert_eq!(closed.len(), 1, "seed {seed}");
    }
}
