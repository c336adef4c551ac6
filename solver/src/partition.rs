//! Block distribution of matrix rows over workers.

use std::ops::Range;

use crate::error::Error;

/// Static assignment of contiguous row ranges to workers.
///
/// The first `V mod N` workers own `⌈V/N⌉` rows, the rest `⌊V/N⌋`. The
/// plan is a pure function of `(V, N)`, so every worker computes an
/// identical copy locally and can answer "who owns row r" without
/// talking to anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    vertices: usize,
    workers: usize,
    /// ⌊V/N⌋ rows per worker before the remainder is spread.
    base: usize,
    /// V mod N workers carry one extra row.
    extra: usize,
}

/// Where a row lives: which worker, and at which offset inside that
/// worker's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOwner {
    pub worker: usize,
    pub offset: usize,
}

impl Partition {
    pub fn new(vertices: usize, workers: usize) -> Result<Self, Error> {
        if vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        Ok(Self {
            vertices,
            workers,
            base: vertices / workers,
            extra: vertices % workers,
        })
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// O(1) owner lookup for a row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= vertices`.
    pub fn owner_of(&self, row: usize) -> RowOwner {
        assert!(row < self.vertices, "row {} out of range", row);
        // Rows below the split sit in the wide blocks (base + 1 rows).
        let split = self.extra * (self.base + 1);
        if row < split {
            RowOwner {
                worker: row / (self.base + 1),
                offset: row % (self.base + 1),
            }
        } else {
            RowOwner {
                worker: self.extra + (row - split) / self.base,
                offset: (row - split) % self.base,
            }
        }
    }

    /// The contiguous row range owned by `worker`; empty when there are
    /// more workers than rows.
    pub fn range(&self, worker: usize) -> Range<usize> {
        assert!(worker < self.workers, "worker {} out of range", worker);
        let start = if worker < self.extra {
            worker * (self.base + 1)
        } else {
            self.extra * (self.base + 1) + (worker - self.extra) * self.base
        };
        start..start + self.len(worker)
    }

    /// Number of rows owned by `worker`.
    pub fn len(&self, worker: usize) -> usize {
        if worker < self.extra {
            self.base + 1
        } else {
            self.base
        }
    }
}
