use std::time::Instant;

use ringmaze::{Maze, ShapeKind, logging::init_tracing, render};

fn main() {
    let _guard = init_tracing(0, None);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(10);

    for kind in [
        ShapeKind::Rectangular { rows: 150, cols: 150 },
        ShapeKind::Circular { rings: 60 },
    ] {
        let mut maze = Maze::new(kind);
        let started = Instant::now();
        for seed in 0..num_iters {
            maze.generate(seed);
            maze.solve();
            if render::render(&maze, 1024, 1024).is_none() {
                tracing::error!("Maze {} produced nothing to render", kind);
            }
        }
        tracing::info!(
            "{}: {} iterations in {:?} ({:?} per iteration)",
            kind,
            num_iters,
            started.elapsed(),
            started.elapsed() / num_iters.max(1) as u32
        );
    }
}
