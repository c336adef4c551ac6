//! The per-worker task of the distributed solver.

use apsp_solver::{Partition, relax_row};
use tokio::sync::mpsc;
use tracing::debug;

use crate::comm::{Collective, Frame};
use crate::error::Error;

/// One isolated worker: owns only its block of matrix rows plus a
/// transient pivot buffer, and talks to peers exclusively through the
/// collective.
pub(crate) struct Worker<C> {
    plan: Partition,
    /// This worker's rows, flat row-major, `plan.len(rank)` rows wide V.
    rows: Vec<i64>,
    comm: C,
    gather: mpsc::Sender<Frame>,
}

impl<C: Collective> Worker<C> {
    pub(crate) fn new(
        plan: Partition,
        rows: Vec<i64>,
        comm: C,
        gather: mpsc::Sender<Frame>,
    ) -> Self {
        Self {
            plan,
            rows,
            comm,
            gather,
        }
    }

    /// Runs the full protocol. On any error the shared abort signal is
    /// tripped first so peers blocked in a collective call unwind too.
    pub(crate) async fn run(mut self) -> Result<(), Error> {
        let result = self.compute().await;
        if result.is_err() {
            self.comm.abort();
        }
        result
    }

    async fn compute(&mut self) -> Result<(), Error> {
        let rank = self.comm.rank();
        let v = self.plan.vertices();
        let range = self.plan.range(rank);
        debug!(worker = rank, rows = range.len(), "worker started");

        let mut pivot = vec![0i64; v];
        for k in 0..v {
            // Everyone resolves the owner locally; no communication.
            let owner = self.plan.owner_of(k);
            if owner.worker == rank {
                let start = owner.offset * v;
                pivot.copy_from_slice(&self.rows[start..start + v]);
            }
            self.comm.broadcast(owner.worker, k, &mut pivot).await?;

            for row in self.rows.chunks_mut(v) {
                relax_row(row, k, &pivot);
            }
        }

        // Gather: deliver the final rows, ascending, tagged with their
        // global row index.
        for (offset, row) in self.rows.chunks(v).enumerate() {
            let frame = Frame {
                tag: range.start + offset,
                values: row.to_vec(),
            };
            self.gather
                .send(frame)
                .await
                .map_err(|_| Error::GatherFailed { worker: rank })?;
        }

        debug!(worker = rank, "worker finished");
        Ok(())
    }
}
