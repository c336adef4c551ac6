//! Dense distance-matrix graph container for all-pairs shortest paths.
//!
//! `apsp-graph` provides the `Graph` type shared by every solver variant:
//! a V×V matrix of edge weights with a reserved [`INF`] sentinel for
//! "no edge / unreachable". The diagonal is fixed to 0 on construction
//! and edges are directed.
//!
//! # Features
//!
//! - Flat row-major storage with cheap row slice access for solvers
//! - Bounds-validated edge accessors (out-of-range is an error, not a panic)
//! - Random graph generation with a target edge density
//! - Plain-text load/save with `INF` spelled literally
//!
//! # Example
//!
//! ```
//! use apsp_graph::{Graph, INF};
//!
//! let mut g = Graph::new(3)?;
//! g.set_edge(0, 1, 4)?;
//! assert_eq!(g.edge(0, 1)?, 4);
//! assert_eq!(g.edge(1, 0)?, INF); // directed
//! # Ok::<(), apsp_graph::Error>(())
//! ```

mod error;
mod io;
mod matrix;
mod random;

pub use error::Error;
pub use matrix::{Graph, INF};
