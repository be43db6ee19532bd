use std::f32::consts::TAU;
use std::fmt;

use crate::{
    error::{MazeError, Result},
    graph::{Adjacency, Graph, NodeId, Point},
};

/// Topology of the full-connectivity graph a maze is carved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// 4-connected grid, no diagonals, no wraparound.
    Rectangular { rows: usize, cols: usize },
    /// Concentric rings around a single centre node.
    Circular { rings: usize },
}

impl ShapeKind {
    /// Rejects parameters that would produce a degenerate graph.
    /// The generators themselves never call this; it belongs at the input boundary.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ShapeKind::Rectangular { rows, cols } if rows == 0 || cols == 0 => {
                Err(MazeError::InvalidShape {
                    reason: format!("a rectangular maze needs at least one row and column, got {rows}x{cols}"),
                })
            }
            ShapeKind::Circular { rings: 0 } => Err(MazeError::InvalidShape {
                reason: "a circular maze needs at least one ring".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangular { rows, cols } => write!(f, "Rectangular ({rows}x{cols})"),
            ShapeKind::Circular { rings } => write!(f, "Circular ({rings} rings)"),
        }
    }
}

/// Axis-aligned region of graph space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Grows the shorter axis symmetrically until `width / height == aspect_ratio`.
    pub fn expand_to_aspect(&mut self, aspect_ratio: f32) {
        let delta_x = self.width();
        let delta_y = self.height();
        let current = delta_x / delta_y;

        if current < aspect_ratio {
            let delta = 0.5 * (delta_y * aspect_ratio - delta_x);
            self.min_x -= delta;
            self.max_x += delta;
        } else if current > aspect_ratio {
            let delta = 0.5 * (delta_x / aspect_ratio - delta_y);
            self.min_y -= delta;
            self.max_y += delta;
        }
    }

    /// Maps a graph-space point to `(row, col)` on a `width` x `height` canvas.
    /// Graph-space y grows upwards, image rows grow downwards.
    pub fn to_image_space(&self, point: Point, width: u32, height: u32) -> (i32, i32) {
        let t = (point.x - self.min_x) / self.width();
        let col = (t * width as f32) as i32;
        let t = (point.y - self.min_y) / self.height();
        let row = ((1.0 - t) * height as f32) as i32;
        (row, col)
    }
}

/// Number of angular positions on the innermost ring.
// Tuning constant, not derived from anything.
pub const BASE_RING_SIZE: usize = 7;
/// Distance between consecutive rings.
pub const RING_SPACING: f32 = 1.0;
/// A ring doubles its angular resolution when the arc between neighbours would exceed this.
// Tuning constant, not derived from anything.
pub const MAX_ARC_LENGTH: f32 = 1.0;

/// Node arena plus the full-connectivity graph over it.
pub struct Shape {
    kind: ShapeKind,
    locations: Vec<Point>,
    graph: Graph,
    start: Option<NodeId>,
    finish: Option<NodeId>,
    bounds: Bounds,
    ring_sizes: Vec<usize>,
}

impl Shape {
    /// Creates an empty shape. Call [`Shape::generate`] to populate it.
    pub fn new(kind: ShapeKind) -> Self {
        Shape {
            kind,
            locations: Vec::new(),
            graph: Graph::new(),
            start: None,
            finish: None,
            bounds: Bounds::default(),
            ring_sizes: Vec::new(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    pub fn finish(&self) -> Option<NodeId> {
        self.finish
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Angular position count per ring, innermost first. Empty for rectangular shapes.
    pub fn ring_sizes(&self) -> &[usize] {
        &self.ring_sizes
    }

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Location of a node in graph space.
    ///
    /// # Panics
    /// If `node` was not created by this shape.
    pub fn location(&self, node: NodeId) -> Point {
        match self.locations.get(node.index()) {
            Some(&point) => point,
            None => panic!("Node {} does not belong to this shape", node),
        }
    }

    /// Clears any previous contents and rebuilds the nodes, adjacencies, start and finish.
    pub fn generate(&mut self) {
        self.locations.clear();
        self.graph.clear_all();
        self.ring_sizes.clear();
        self.start = None;
        self.finish = None;

        match self.kind {
            ShapeKind::Rectangular { rows, cols } => self.generate_rectangular(rows, cols),
            ShapeKind::Circular { rings } => self.generate_circular(rings),
        }

        tracing::debug!(
            "[shape] generated {}: {} nodes, {} adjacencies",
            self.kind,
            self.graph.node_count(),
            self.graph.adjacency_count()
        );
    }

    fn create_node(&mut self, location: Point) -> NodeId {
        let id = NodeId(self.locations.len());
        self.locations.push(location);
        self.graph.insert_node(id);
        id
    }

    fn generate_rectangular(&mut self, rows: usize, cols: usize) {
        self.bounds = Bounds {
            min_x: -1.0,
            max_x: cols as f32,
            min_y: -1.0,
            max_y: rows as f32,
        };

        // Node (row, col) gets id row * cols + col, row 0 at the top
        for row in 0..rows {
            let y = (rows - row - 1) as f32;
            for col in 0..cols {
                self.create_node(Point::new(col as f32, y));
            }
        }

        let id = |row: usize, col: usize| NodeId(row * cols + col);
        for row in 0..rows {
            for col in 0..cols {
                if row + 1 < rows {
                    self.graph
                        .insert_adjacency(Adjacency::new(id(row, col), id(row + 1, col)));
                }
                if col + 1 < cols {
                    self.graph
                        .insert_adjacency(Adjacency::new(id(row, col), id(row, col + 1)));
                }
            }
        }

        if rows > 0 && cols > 0 {
            self.start = Some(id(0, 0));
            self.finish = Some(id(rows - 1, cols - 1));
        }
    }

    fn generate_circular(&mut self, rings: usize) {
        let extent = rings as f32 * RING_SPACING + 1.0;
        self.bounds = Bounds {
            min_x: -extent,
            max_x: extent,
            min_y: -extent,
            max_y: extent,
        };

        let center = self.create_node(Point::new(0.0, 0.0));

        // First node id of each ring
        let mut ring_starts = Vec::with_capacity(rings);
        for ring in 0..rings {
            let radius = (ring + 1) as f32 * RING_SPACING;
            let size = match self.ring_sizes.last() {
                None => BASE_RING_SIZE,
                Some(&inner) if TAU * radius / inner as f32 > MAX_ARC_LENGTH => inner * 2,
                Some(&inner) => inner,
            };
            ring_starts.push(self.locations.len());
            self.ring_sizes.push(size);

            (0..size).for_each(|j| {
                let angle = TAU * j as f32 / size as f32;
                self.create_node(Point::new(radius * angle.cos(), radius * angle.sin()));
            });
        }

        if rings == 0 {
            self.start = Some(center);
            self.finish = Some(center);
            return;
        }

        self.graph
            .insert_adjacency(Adjacency::new(center, NodeId(ring_starts[0])));

        for ring in 0..rings {
            let size = self.ring_sizes[ring];
            let first = ring_starts[ring];
            // Outer neighbour ring and the factor mapping inner indices onto it
            let outer = (ring + 1 < rings).then(|| {
                let scale = self.ring_sizes[ring + 1] / size;
                (ring_starts[ring + 1], scale)
            });

            for j in 0..size {
                let node = NodeId(first + j);
                if size > 1 {
                    self.graph
                        .insert_adjacency(Adjacency::new(node, NodeId(first + (j + 1) % size)));
                }
                if let Some((outer_first, scale)) = outer {
                    self.graph
                        .insert_adjacency(Adjacency::new(node, NodeId(outer_first + j * scale)));
                }
            }
        }

        self.start = Some(center);
        self.finish = Some(NodeId(ring_starts[rings - 1]));
    }
}
