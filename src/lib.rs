pub mod error;
pub mod generators;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod render;
pub mod shape;
pub mod solvers;

pub use error::{MazeError, Result};
pub use maze::{Maze, Viewport};
pub use shape::ShapeKind;
