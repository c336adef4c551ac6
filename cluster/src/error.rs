//! Error types for distributed runs.
//!
//! Communication failures are fatal for the whole computation: there is
//! no retry and no partial result, because per-worker state is
//! meaningless outside the full collective. Every variant carries enough
//! context (worker id, iteration, row) to diagnose the failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("worker {worker} lost its channel at iteration {iteration}")]
    ChannelClosed { worker: usize, iteration: usize },

    #[error("worker {worker} aborted at iteration {iteration}")]
    Aborted { worker: usize, iteration: usize },

    #[error("worker {worker} expected pivot frame {expected}, received {found}")]
    FrameMismatch {
        worker: usize,
        expected: usize,
        found: usize,
    },

    #[error("worker {worker} failed to deliver gathered rows")]
    GatherFailed { worker: usize },

    #[error("gather produced malformed row {row}")]
    MalformedRow { row: usize },

    #[error("gather delivered row {row} twice")]
    DuplicateRow { row: usize },

    #[error("gather missing row {row}")]
    MissingRow { row: usize },

    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Solver(#[from] apsp_solver::Error),

    #[error(transparent)]
    Graph(#[from] apsp_graph::Error),
}
