//! Error types for solver runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("worker count must be positive")]
    InvalidWorkerCount,

    #[error("worker thread {worker} panicked")]
    WorkerPanicked { worker: usize },
}
