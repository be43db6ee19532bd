use std::fmt;

/// Index of a node in the arena owned by a [`crate::shape::Shape`].
/// Graphs never own nodes, they only refer to them by id, so the full-connectivity
/// graph and the spanning tree can share the same node set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Location of a node in graph space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Undirected edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacency {
    pub node_a: NodeId,
    pub node_b: NodeId,
}

impl Adjacency {
    pub fn new(node_a: NodeId, node_b: NodeId) -> Self {
        Adjacency { node_a, node_b }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node_a == node || self.node_b == node
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.node_a == node {
            Some(self.node_b)
        } else if self.node_b == node {
            Some(self.node_a)
        } else {
            None
        }
    }

    /// The endpoint pair with the smaller id first, for order-insensitive comparisons.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.node_a <= self.node_b {
            (self.node_a, self.node_b)
        } else {
            (self.node_b, self.node_a)
        }
    }
}

/// Plain container of node ids and adjacencies, both kept in insertion order.
///
/// No membership checks are made: callers must not insert a node twice, and must
/// only insert adjacencies whose endpoints are already members of this graph.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<NodeId>,
    adjacencies: Vec<Adjacency>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn with_capacity(nodes: usize, adjacencies: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(nodes),
            adjacencies: Vec::with_capacity(adjacencies),
        }
    }

    pub fn insert_node(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Removes the first occurrence of `node`. Adjacencies touching it are left alone.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        match self.nodes.iter().position(|&n| n == node) {
            Some(idx) => {
                self.nodes.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn insert_adjacency(&mut self, adjacency: Adjacency) {
        self.adjacencies.push(adjacency);
    }

    /// Removes the first adjacency equal to `adjacency` (same endpoints in the same order).
    pub fn remove_adjacency(&mut self, adjacency: &Adjacency) -> bool {
        match self.adjacencies.iter().position(|a| a == adjacency) {
            Some(idx) => {
                self.adjacencies.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.nodes.clear();
        self.clear_adjacencies();
    }

    pub fn clear_adjacencies(&mut self) {
        self.adjacencies.clear();
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn adjacencies(&self) -> &[Adjacency] {
        &self.adjacencies
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn adjacency_count(&self) -> usize {
        self.adjacencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
