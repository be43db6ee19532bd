mod viewport;

pub use viewport::Viewport;

use crate::{
    generators::{Generator, generate_maze},
    graph::{Adjacency, Graph},
    shape::{Shape, ShapeKind},
    solvers::{Solver, solve_maze},
};

/// A shape, the maze carved out of it, and optionally its solution.
///
/// Not meant for concurrent use: generate, solve and render calls on one maze
/// must be serialized by the caller.
pub struct Maze {
    shape: Shape,
    spanning_tree: Option<Graph>,
    solution: Vec<Adjacency>,
    generator: Generator,
    solver: Solver,
}

impl Maze {
    pub fn new(kind: ShapeKind) -> Self {
        Maze {
            shape: Shape::new(kind),
            spanning_tree: None,
            solution: Vec::new(),
            generator: Generator::default(),
            solver: Solver::default(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The maze corridors, once generated.
    pub fn spanning_tree(&self) -> Option<&Graph> {
        self.spanning_tree.as_ref()
    }

    /// Corridors on the path from start to finish. Empty until [`Maze::solve`] succeeds.
    pub fn solution(&self) -> &[Adjacency] {
        &self.solution
    }

    /// Rebuilds the shape and carves a new maze from it. Any previous solution is dropped.
    pub fn generate(&mut self, seed: u64) {
        self.shape.generate();
        let tree = generate_maze(&self.shape, self.generator, seed);
        tracing::info!(
            "Generated {} maze with {} using seed {}: {} corridors",
            self.shape.kind(),
            self.generator,
            seed,
            tree.adjacency_count()
        );
        self.spanning_tree = Some(tree);
        self.solution.clear();
    }

    /// Solves the maze. Returns `false`, leaving no solution, if there is nothing to solve.
    pub fn solve(&mut self) -> bool {
        self.solution.clear();
        let Some(tree) = &self.spanning_tree else {
            tracing::warn!("Cannot solve a maze that has not been generated");
            return false;
        };
        match solve_maze(tree, self.shape.start(), self.shape.finish(), self.solver) {
            Some(path) => {
                tracing::info!("Solved with {}: {} corridors", self.solver, path.len());
                self.solution = path;
                true
            }
            None => {
                tracing::warn!("No path found between start and finish");
                false
            }
        }
    }

    /// Coordinate mapping for a `width` x `height` canvas, or `None` if there is nothing to draw yet.
    pub fn viewport(&self, width: u32, height: u32) -> Option<Viewport> {
        match &self.spanning_tree {
            Some(tree) if !tree.is_empty() => {
                Some(Viewport::new(self.shape.bounds(), width, height))
            }
            _ => None,
        }
    }

    /// Pixel `(row, col)` of both endpoints of an adjacency.
    pub fn image_space_adjacency(
        &self,
        viewport: &Viewport,
        adjacency: &Adjacency,
    ) -> ((i32, i32), (i32, i32)) {
        (
            viewport.to_image_space(self.shape.location(adjacency.node_a)),
            viewport.to_image_space(self.shape.location(adjacency.node_b)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_solve() {
        let mut maze = Maze::new(ShapeKind::Rectangular { rows: 8, cols: 11 });
        maze.generate(99);
        assert_eq!(maze.spanning_tree().unwrap().adjacency_count(), 8 * 11 - 1);

        assert!(maze.solve());
        let tree = maze.spanning_tree().unwrap();
        let solution = maze.solution();
        // At least the Manhattan distance between opposite corners
        assert!(solution.len() >= 7 + 10);
        assert!(solution.iter().all(|a| tree.adjacencies().contains(a)));
    }

    #[test]
    fn test_solve_before_generate() {
        let mut maze = Maze::new(ShapeKind::Circular { rings: 3 });
        assert!(!maze.solve());
        assert!(maze.solution().is_empty());
        assert!(maze.spanning_tree().is_none());
        assert!(maze.viewport(64, 64).is_none());
    }

    #[test]
    fn test_repeated_solve_is_stable() {
        let mut maze = Maze::new(ShapeKind::Circular { rings: 4 });
        maze.generate(3);
        assert!(maze.solve());
        let first = maze.solution().to_vec();
        assert!(maze.solve());
        assert_eq!(maze.solution(), first.as_slice());
    }

    #[test]
    fn test_single_cell_maze() {
        let mut maze = Maze::new(ShapeKind::Rectangular { rows: 1, cols: 1 });
        maze.generate(0);
        assert!(maze.solve());
        assert!(maze.solution().is_empty());
    }

    #[test]
    fn test_regenerate_clears_solution() {
        let mut maze = Maze::new(ShapeKind::Rectangular { rows: 4, cols: 4 });
        maze.generate(1);
        assert!(maze.solve());
        maze.generate(2);
        assert!(maze.solution().is_empty());
        assert_eq!(maze.spanning_tree().unwrap().adjacency_count(), 15);
    }

    #[test]
    fn test_image_space_adjacency() {
        let mut maze = Maze::new(ShapeKind::Rectangular { rows: 1, cols: 2 });
        maze.generate(0);
        // Bounds [-1, 2] x [-1, 1] widen to [-1, 2] x [-1.5, 1.5] on a square canvas
        let viewport = maze.viewport(300, 300).unwrap();
        let adjacency = maze.spanning_tree().unwrap().adjacencies()[0];
        let (a, b) = maze.image_space_adjacency(&viewport, &adjacency);
        assert_eq!(a.0, b.0);
        assert!((99..=101).contains(&(a.1 - b.1).abs()));
    }
}
