use crate::graph::NodeId;

/// Disjoint sets over node ids, used as scratch state while carving a maze.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl UnionFind {
    /// One singleton set per node id in `0..size`.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            set_count: size,
        }
    }

    /// Representative of the set containing `node`.
    pub fn find(&mut self, node: NodeId) -> NodeId {
        NodeId(self.find_index(node.index()))
    }

    fn find_index(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            // Path compression only, the representative itself is unaffected
            self.parent[x] = self.find_index(self.parent[x]);
        }
        self.parent[x]
    }

    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find_index(a.index()) == self.find_index(b.index())
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already joined.
    pub fn unite(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find_index(a.index());
        let root_b = self.find_index(b.index());

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_b] = root_a;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_a] = root_b;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }
        self.set_count -= 1;
        true
    }

    /// Number of distinct sets remaining.
    pub fn set_count(&self) -> usize {
        self.set_count
    }
}
