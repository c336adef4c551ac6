//! Plain-text graph load/save.
//!
//! Format: the vertex count on the first line, then V lines of V
//! whitespace-separated weights with unreachable entries spelled `INF`.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::matrix::{Graph, INF};

impl Graph {
    /// Reads a graph from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let mut tokens = text.split_whitespace();

        let vertices: usize = tokens
            .next()
            .ok_or(Error::MatrixSize {
                expected: 1,
                found: 0,
            })?
            .parse()?;

        let mut dist = Vec::with_capacity(vertices * vertices);
        for token in tokens {
            if token == "INF" {
                dist.push(INF);
            } else {
                dist.push(token.parse()?);
            }
        }

        Graph::from_flat(vertices, dist)
    }

    /// Writes the graph to a text file in the format [`Graph::load`] reads.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let contents = format!("{}\n{}", self.vertex_count(), self);
        fs::write(path, contents)?;
        Ok(())
    }
}
