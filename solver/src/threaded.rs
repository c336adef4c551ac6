//! Shared-memory Floyd-Warshall over a pool of worker threads.

use std::thread;

use apsp_graph::Graph;

use crate::error::Error;
use crate::kernel::relax_row;
use crate::partition::Partition;

/// Computes all-pairs shortest paths with `threads` worker threads over
/// one shared matrix.
///
/// Each pivot iteration forks scoped workers over disjoint `&mut` row
/// windows and joins them before the next iteration starts. The static
/// partition means no two threads ever write the same row, so no locks
/// are needed. The join is the hard iteration barrier: row k+1's
/// correctness depends on the fully relaxed state after iteration k.
///
/// `threads == 0` means "use the available hardware parallelism". The
/// thread count affects wall-clock time only, never the result.
pub fn solve(graph: &Graph, threads: usize) -> Result<Graph, Error> {
    let v = graph.vertex_count();
    let threads = if threads == 0 {
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    } else {
        threads
    };
    // More threads than rows would only spawn idle workers.
    let plan = Partition::new(v, threads.min(v))?;

    let mut result = graph.clone();
    let mut pivot = vec![0i64; v];

    for k in 0..v {
        pivot.copy_from_slice(result.row(k));

        let mut panicked = None;
        thread::scope(|s| {
            let mut handles = Vec::with_capacity(plan.workers());
            let mut rest = result.as_mut_slice();
            for worker in 0..plan.workers() {
                let (block, tail) = rest.split_at_mut(plan.len(worker) * v);
                rest = tail;
                let pivot = &pivot;
                handles.push(s.spawn(move || {
                    for row in block.chunks_mut(v) {
                        relax_row(row, k, pivot);
                    }
                }));
            }
            for (worker, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && panicked.is_none() {
                    panicked = Some(worker);
                }
            }
        });

        if let Some(worker) = panicked {
            return Err(Error::WorkerPanicked { worker });
        }
    }

    Ok(result)
}
