use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("grid size must be positive, got {size}")]
    InvalidSize { size: usize },

    #[error("alive probability {probability} is outside [0, 1]")]
    InvalidProbability { probability: f64 },

    #[error("expected a grid of side {expected}, got {actual}")]
    GridSize { expected: usize, actual: usize },

    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
