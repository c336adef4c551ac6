//! Collective communication between workers.
//!
//! The only primitive the protocol needs is a blocking broadcast from a
//! designated sender with an implicit barrier at completion. It is a
//! trait so the transport stays a seam; the in-process implementation
//! runs over a full mesh of per-worker channels.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Barrier, mpsc, watch};

use crate::error::Error;

/// One frame of a collective exchange: a full matrix row tagged with the
/// pivot iteration it belongs to (or, during gather, its row index).
#[derive(Debug, Clone)]
pub struct Frame {
    pub tag: usize,
    pub values: Vec<i64>,
}

/// The collective primitive required from the runtime: a blocking
/// broadcast-from-root. All participants must call it with the same
/// `root` and `tag`; none proceeds before every one of them holds the
/// payload.
#[async_trait]
pub trait Collective: Send {
    /// On the root, fans `buf` out to all peers; elsewhere, blocks until
    /// the frame for `tag` arrives and replaces `buf` with it. Completes
    /// with a barrier across all participants.
    async fn broadcast(&mut self, root: usize, tag: usize, buf: &mut Vec<i64>)
    -> Result<(), Error>;

    fn rank(&self) -> usize;

    /// Trips the shared abort signal; every peer blocked in or entering
    /// a collective call fails with [`Error::Aborted`].
    fn abort(&self);
}

/// In-process collective over a full mesh of `mpsc` queues, with a shared
/// barrier for the completion sync and a `watch` channel as the abort
/// signal.
pub struct ChannelCollective {
    rank: usize,
    peers: Vec<mpsc::Sender<Frame>>,
    inbox: mpsc::Receiver<Frame>,
    barrier: Arc<Barrier>,
    abort_tx: Arc<watch::Sender<bool>>,
    abort_rx: watch::Receiver<bool>,
}

/// Builds one connected collective per worker rank.
pub fn mesh(workers: usize) -> Vec<ChannelCollective> {
    assert!(workers > 0, "mesh needs at least one worker");

    let mut senders = Vec::with_capacity(workers);
    let mut inboxes = Vec::with_capacity(workers);
    for _ in 0..workers {
        let (tx, rx) = mpsc::channel(workers);
        senders.push(tx);
        inboxes.push(rx);
    }

    let barrier = Arc::new(Barrier::new(workers));
    let (abort_tx, abort_rx) = watch::channel(false);
    let abort_tx = Arc::new(abort_tx);

    inboxes
        .into_iter()
        .enumerate()
        .map(|(rank, inbox)| ChannelCollective {
            rank,
            peers: senders.clone(),
            inbox,
            barrier: Arc::clone(&barrier),
            abort_tx: Arc::clone(&abort_tx),
            abort_rx: abort_rx.clone(),
        })
        .collect()
}

#[async_trait]
impl Collective for ChannelCollective {
    async fn broadcast(
        &mut self,
        root: usize,
        tag: usize,
        buf: &mut Vec<i64>,
    ) -> Result<(), Error> {
        if *self.abort_rx.borrow() {
            return Err(Error::Aborted {
                worker: self.rank,
                iteration: tag,
            });
        }

        if self.rank == root {
            for (peer, tx) in self.peers.iter().enumerate() {
                if peer == self.rank {
                    continue;
                }
                let frame = Frame {
                    tag,
                    values: buf.clone(),
                };
                tx.send(frame).await.map_err(|_| Error::ChannelClosed {
                    worker: self.rank,
                    iteration: tag,
                })?;
            }
        } else {
            let frame = tokio::select! {
                frame = self.inbox.recv() => frame.ok_or(Error::ChannelClosed {
                    worker: self.rank,
                    iteration: tag,
                })?,
                _ = self.abort_rx.changed() => {
                    return Err(Error::Aborted {
                        worker: self.rank,
                        iteration: tag,
                    });
                }
            };
            if frame.tag != tag {
                return Err(Error::FrameMismatch {
                    worker: self.rank,
                    expected: tag,
                    found: frame.tag,
                });
            }
            *buf = frame.values;
        }

        // Implicit barrier: nobody leaves the broadcast before everybody
        // holds the payload. The abort arm frees peers of a worker that
        // died before reaching the barrier.
        tokio::select! {
            _ = self.barrier.wait() => Ok(()),
            _ = self.abort_rx.changed() => Err(Error::Aborted {
                worker: self.rank,
                iteration: tag,
            }),
        }
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn abort(&self) {
        let _ = self.abort_tx.send(true);
    }
}
