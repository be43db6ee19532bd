use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{Adjacency, Graph, NodeId};

/// Builds undirected neighbour lists for every node of `tree`.
///
/// # Panics
/// If an adjacency refers to a node that was never inserted into `tree`.
fn neighbor_lists(tree: &Graph) -> HashMap<NodeId, Vec<NodeId>> {
    let mut neighbors = tree
        .nodes()
        .iter()
        .map(|&node| (node, Vec::new()))
        .collect::<HashMap<_, _>>();

    for adjacency in tree.adjacencies() {
        for (from, to) in [
            (adjacency.node_a, adjacency.node_b),
            (adjacency.node_b, adjacency.node_a),
        ] {
            match neighbors.get_mut(&from) {
                Some(list) => list.push(to),
                None => panic!("Adjacency endpoint {} is not a node of the spanning tree", from),
            }
        }
    }
    neighbors
}

/// Breadth-first search from `start` to `finish` over the corridors of `tree`.
///
/// Returns the adjacencies of `tree` lying on the shortest path, in the tree's
/// own order, or `None` when the tree is empty, an endpoint is missing, or
/// `finish` cannot be reached. `start == finish` yields an empty path.
pub fn solve_bfs(
    tree: &Graph,
    start: Option<NodeId>,
    finish: Option<NodeId>,
) -> Option<Vec<Adjacency>> {
    let (Some(start), Some(finish)) = (start, finish) else {
        return None;
    };
    if tree.is_empty() {
        return None;
    }

    let neighbors = neighbor_lists(tree);
    if !neighbors.contains_key(&start) || !neighbors.contains_key(&finish) {
        return None;
    }

    let mut visited = HashSet::from([start]);
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    let mut found = false;

    while let Some(node) = queue.pop_front() {
        if node == finish {
            found = true;
            break;
        }
        for &neighbor in &neighbors[&node] {
            if visited.insert(neighbor) {
                parents.insert(neighbor, node);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!("[bfs] visited {} of {} nodes", visited.len(), tree.node_count());
    if !found {
        return None;
    }

    // Backtrack from the finish; the start is the only node without a parent
    let mut on_path = HashSet::from([finish]);
    let mut node = finish;
    while let Some(&parent) = parents.get(&node) {
        on_path.insert(parent);
        node = parent;
    }

    Some(
        tree.adjacencies()
            .iter()
            .filter(|a| on_path.contains(&a.node_a) && on_path.contains(&a.node_b))
            .copied()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tree(node_count: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new();
        (0..node_count).for_each(|i| graph.insert_node(NodeId(i)));
        edges
            .iter()
            .for_each(|&(a, b)| graph.insert_adjacency(Adjacency::new(NodeId(a), NodeId(b))));
        graph
    }

    /// Asserts that `path` is a single simple path joining `start` and `finish`.
    fn assert_simple_path(path: &[Adjacency], start: NodeId, finish: NodeId) {
        let mut node = start;
        let mut remaining = path.to_vec();
        let mut seen = HashSet::from([start]);
        while node != finish {
            let idx = remaining
                .iter()
                .position(|a| a.contains(node))
                .expect("path is broken");
            let next = remaining.swap_remove(idx).other(node).unwrap();
            assert!(seen.insert(next), "path revisits {next}");
            node = next;
        }
        assert!(remaining.is_empty(), "path has stray edges: {remaining:?}");
    }

    #[test]
    fn test_solve_2x2() {
        // 0 1
        // 2 3
        let shapes: [&[(usize, usize)]; 3] = [
            &[(0, 1), (1, 3), (0, 2)],
            &[(0, 2), (2, 3), (1, 3)],
            &[(0, 1), (0, 2), (2, 3)],
        ];
        for edges in shapes {
            let tree = build_tree(4, edges);
            let path = solve_bfs(&tree, Some(NodeId(0)), Some(NodeId(3))).unwrap();
            assert!((1..=2).contains(&path.len()));
            assert_simple_path(&path, NodeId(0), NodeId(3));
        }
    }

    #[test]
    fn test_shortest_path_skips_branches() {
        // A branch hanging off the path must not be part of the solution
        let tree = build_tree(6, &[(0, 1), (1, 2), (1, 4), (4, 5), (2, 3)]);
        let path = solve_bfs(&tree, Some(NodeId(0)), Some(NodeId(3))).unwrap();
        assert_eq!(
            path,
            vec![
                Adjacency::new(NodeId(0), NodeId(1)),
                Adjacency::new(NodeId(1), NodeId(2)),
                Adjacency::new(NodeId(2), NodeId(3)),
            ]
        );
    }

    #[test]
    fn test_direct_edge() {
        let tree = build_tree(3, &[(2, 0), (0, 1)]);
        let path = solve_bfs(&tree, Some(NodeId(0)), Some(NodeId(2))).unwrap();
        assert_eq!(path, vec![Adjacency::new(NodeId(2), NodeId(0))]);
    }

    #[test]
    fn test_start_equals_finish() {
        let tree = build_tree(3, &[(0, 1), (1, 2)]);
        let path = solve_bfs(&tree, Some(NodeId(1)), Some(NodeId(1))).unwrap();
        assert!(path.is_empty());

        let single = build_tree(1, &[]);
        assert_eq!(solve_bfs(&single, Some(NodeId(0)), Some(NodeId(0))), Some(vec![]));
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(solve_bfs(&Graph::new(), Some(NodeId(0)), Some(NodeId(1))), None);
        let tree = build_tree(2, &[(0, 1)]);
        assert_eq!(solve_bfs(&tree, None, Some(NodeId(1))), None);
        assert_eq!(solve_bfs(&tree, Some(NodeId(0)), None), None);
        assert_eq!(solve_bfs(&tree, Some(NodeId(0)), Some(NodeId(9))), None);
    }

    #[test]
    fn test_unreachable_finish() {
        let tree = build_tree(4, &[(0, 1), (2, 3)]);
        assert_eq!(solve_bfs(&tree, Some(NodeId(0)), Some(NodeId(3))), None);
    }

    #[test]
    #[should_panic(expected = "is not a node of the spanning tree")]
    fn test_unregistered_endpoint_panics() {
        let tree = build_tree(2, &[(0, 5)]);
        solve_bfs(&tree, Some(NodeId(0)), Some(NodeId(1)));
    }
}
