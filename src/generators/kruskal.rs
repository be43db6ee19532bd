use rand::Rng;

use crate::{
    generators::{get_rng, union_find::UnionFind},
    graph::{Adjacency, Graph},
    shape::Shape,
};

/// Shuffles by repeatedly moving a uniformly chosen pending adjacency to the output.
pub fn shuffle_adjacencies<R: Rng + ?Sized>(
    mut pending: Vec<Adjacency>,
    rng: &mut R,
) -> Vec<Adjacency> {
    let mut shuffled = Vec::with_capacity(pending.len());
    while !pending.is_empty() {
        let idx = rng.random_range(0..pending.len());
        shuffled.push(pending.swap_remove(idx));
    }
    shuffled
}

/// Carves a spanning tree out of the shape's full-connectivity graph.
///
/// The returned graph holds the same node ids as the shape and `N - 1` adjacencies.
/// The same shape and seed always produce the same tree.
pub fn randomized_kruskal(shape: &Shape, seed: u64) -> Graph {
    let source = shape.graph();
    let node_count = source.node_count();

    let mut tree = Graph::with_capacity(node_count, node_count.saturating_sub(1));
    source.nodes().iter().for_each(|&node| tree.insert_node(node));
    if source.is_empty() {
        return tree;
    }

    let mut rng = get_rng(seed);
    let shuffled = shuffle_adjacencies(source.adjacencies().to_vec(), &mut rng);
    tracing::debug!("[kruskal] shuffled {} adjacencies", shuffled.len());

    let mut sets = UnionFind::new(shape.node_count());
    let mut examined = 0;
    for adjacency in shuffled {
        // A single set means every node is already connected
        if sets.set_count() == 1 {
            break;
        }
        examined += 1;
        if sets.unite(adjacency.node_a, adjacency.node_b) {
            tree.insert_adjacency(Adjacency::new(adjacency.node_a, adjacency.node_b));
        }
    }

    tracing::debug!(
        "[kruskal] examined {} adjacencies, kept {} corridors",
        examined,
        tree.adjacency_count()
    );
    tree
}
