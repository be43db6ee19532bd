use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};

mod kruskal;
mod union_find;

pub use kruskal::{randomized_kruskal, shuffle_adjacencies};
pub use union_find::UnionFind;

use crate::{graph::Graph, shape::Shape};

/// Get a seeded random number generator, so a maze can be reproduced from its seed.
fn get_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the current time, for runs where the caller did not pick one.
pub fn time_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis()),
        Err(_) => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generator {
    #[default]
    Kruskal,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

/// Builds the spanning tree for an already generated shape.
pub fn generate_maze(shape: &Shape, generator: Generator, seed: u64) -> Graph {
    match generator {
        Generator::Kruskal => randomized_kruskal(shape, seed),
    }
}
