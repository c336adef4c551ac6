//! The dense V×V distance matrix.

use std::fmt;

use crate::error::Error;

/// Sentinel weight for "no edge / unreachable".
///
/// Chosen well below `i64::MAX` so that `INF + INF` cannot overflow while
/// still exceeding any sum of real edge weights, which keeps the
/// finite-plus-finite relaxation guard a plain comparison.
pub const INF: i64 = i64::MAX / 4;

/// A dense directed weighted graph stored as a V×V distance matrix.
///
/// Storage is one flat row-major `Vec<i64>`. Entry `(i, j)` holds the
/// weight of the edge i→j, or [`INF`] when there is none. The diagonal is
/// 0 on construction and the matrix is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    dist: Vec<i64>,
}

impl Graph {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Result<Self, Error> {
        if vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        let mut dist = vec![INF; vertices * vertices];
        for i in 0..vertices {
            dist[i * vertices + i] = 0;
        }
        Ok(Self { vertices, dist })
    }

    /// Rebuilds a graph from a flat row-major matrix, e.g. rows gathered
    /// back from distributed workers.
    pub fn from_flat(vertices: usize, dist: Vec<i64>) -> Result<Self, Error> {
        if vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        if dist.len() != vertices * vertices {
            return Err(Error::MatrixSize {
                expected: vertices * vertices,
                found: dist.len(),
            });
        }
        Ok(Self { vertices, dist })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Returns the weight of the edge `from`→`to`.
    pub fn edge(&self, from: usize, to: usize) -> Result<i64, Error> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.dist[from * self.vertices + to])
    }

    /// Sets the weight of the edge `from`→`to`.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<(), Error> {
        self.check(from)?;
        self.check(to)?;
        self.dist[from * self.vertices + to] = weight;
        Ok(())
    }

    /// Row `i` as a slice of length V.
    ///
    /// # Panics
    ///
    /// Panics if `i >= vertex_count()`. Solvers index rows they computed
    /// from the vertex count; use [`Graph::edge`] for validated access.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.dist[i * self.vertices..(i + 1) * self.vertices]
    }

    /// Mutable row `i`; same contract as [`Graph::row`].
    pub fn row_mut(&mut self, i: usize) -> &mut [i64] {
        &mut self.dist[i * self.vertices..(i + 1) * self.vertices]
    }

    /// The whole matrix, row-major.
    pub fn as_slice(&self) -> &[i64] {
        &self.dist
    }

    /// The whole matrix, row-major and mutable. Splitting this into
    /// disjoint per-row windows is how the parallel solvers hand each
    /// worker its own write region.
    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.dist
    }

    fn check(&self, vertex: usize) -> Result<(), Error> {
        if vertex >= self.vertices {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertices: self.vertices,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.vertices {
            for j in 0..self.vertices {
                if j > 0 {
                    write!(f, " ")?;
                }
                let w = self.dist[i * self.vertices + j];
                if w == INF {
                    write!(f, "{:>4}", "INF")?;
                } else {
                    write!(f, "{:>4}", w)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
