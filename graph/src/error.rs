//! Error types for graph construction and access.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("edge density {0} outside [0, 1]")]
    InvalidDensity(f64),

    #[error("invalid weight range {min}..={max}")]
    InvalidWeightRange { min: i64, max: i64 },

    #[error("matrix has {found} entries, expected {expected}")]
    MatrixSize { expected: usize, found: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid weight: {0}")]
    ParseWeight(#[from] std::num::ParseIntError),
}
