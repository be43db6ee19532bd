use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid shape parameters: {reason}")]
    InvalidShape { reason: String },

    #[error("Maze has not been generated yet")]
    NotGenerated,

    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
