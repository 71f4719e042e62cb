//! Error types shared by every solver.

use thiserror::Error;

/// Errors raised while configuring or running a solver.
///
/// Every variant except [`TspError::Cancelled`] is a configuration error:
/// it is detected before any search work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TspError {
    #[error("distance matrix is empty")]
    EmptyGraph,

    #[error("distance matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("graph has {vertices} vertices, at least {min} required")]
    TooFewVertices { vertices: usize, min: usize },

    #[error("graph has {vertices} vertices, at most {max} supported")]
    TooManyVertices { vertices: usize, max: usize },

    #[error("start vertex {start} is out of range for {vertices} vertices")]
    InvalidStart { start: usize, vertices: usize },

    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("solve was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, TspError>;
