mod bfs;

pub use bfs::solve_bfs;

use crate::graph::{Adjacency, Graph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    #[default]
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Finds the corridors joining `start` and `finish`, or `None` if there is no solution.
pub fn solve_maze(
    tree: &Graph,
    start: Option<NodeId>,
    finish: Option<NodeId>,
    solver: Solver,
) -> Option<Vec<Adjacency>> {
    match solver {
        Solver::Bfs => solve_bfs(tree, start, finish),
    }
}
