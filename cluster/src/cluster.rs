//! The distributed coordinator: scatter, solve, gather.

use apsp_graph::{Graph, INF};
use apsp_solver::Partition;
use futures_util::future::try_join_all;
use tokio::sync::mpsc;
use tracing::debug;

use crate::comm;
use crate::error::Error;
use crate::worker::Worker;

/// Computes all-pairs shortest paths across `workers` isolated worker
/// tasks with no shared matrix.
///
/// Rows are block-partitioned; each iteration the owner of the pivot row
/// broadcasts it through the collective, every worker relaxes its own
/// rows, and after the last iteration the workers' final rows are
/// gathered back into one matrix. Any worker failure aborts the whole
/// run: no partial result is ever returned.
///
/// The worker count affects scheduling only, never the numeric result.
/// Like the other variants, behavior on graphs with negative-weight
/// cycles is unspecified.
pub async fn solve(graph: &Graph, workers: usize) -> Result<Graph, Error> {
    let v = graph.vertex_count();
    let plan = Partition::new(v, workers)?;
    debug!(vertices = v, workers, "starting distributed solve");

    // Capacity covers every gathered row, so workers never block on the
    // collector.
    let (gather_tx, mut gather_rx) = mpsc::channel(v);

    let mut handles = Vec::with_capacity(workers);
    for (rank, collective) in comm::mesh(workers).into_iter().enumerate() {
        // Scatter: each worker receives a copy of its block and nothing
        // else; the matrix never crosses the worker boundary whole.
        let range = plan.range(rank);
        let rows = graph.as_slice()[range.start * v..range.end * v].to_vec();
        let worker = Worker::new(plan, rows, collective, gather_tx.clone());
        handles.push(tokio::spawn(worker.run()));
    }
    drop(gather_tx);

    // Collect rows as they arrive; the channel closes once every worker
    // has finished or failed.
    let mut dist = vec![INF; v * v];
    let mut seen = vec![false; v];
    while let Some(frame) = gather_rx.recv().await {
        let row = frame.tag;
        if row >= v || frame.values.len() != v {
            return Err(Error::MalformedRow { row });
        }
        if seen[row] {
            return Err(Error::DuplicateRow { row });
        }
        seen[row] = true;
        dist[row * v..(row + 1) * v].copy_from_slice(&frame.values);
    }

    // Join before checking coverage, so a worker error surfaces as
    // itself rather than as a missing row. Peers of a failed worker
    // report Aborted; prefer the root cause.
    let mut aborted = None;
    for result in try_join_all(handles).await? {
        match result {
            Ok(()) => {}
            Err(err @ Error::Aborted { .. }) => {
                aborted.get_or_insert(err);
            }
            Err(err) => return Err(err),
        }
    }
    if let Some(err) = aborted {
        return Err(err);
    }
    if let Some(row) = seen.iter().position(|&s| !s) {
        return Err(Error::MissingRow { row });
    }

    Ok(Graph::from_flat(v, dist)?)
}
