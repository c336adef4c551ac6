//! Floyd-Warshall all-pairs shortest paths.
//!
//! `apsp-solver` implements the shared numeric core (the per-row
//! relaxation kernel and the block row partition) together with two
//! coordinators over it:
//!
//! - [`sequential::solve`]: single-threaded oracle
//! - [`threaded::solve`]: fork-join over disjoint row blocks, one barrier
//!   per pivot iteration
//!
//! The distributed coordinator in `apsp-cluster` drives the same kernel
//! and partition across isolated workers.
//!
//! All variants run the identical outer loop over pivot index
//! `k = 0..V` and produce elementwise-identical results; they differ only
//! in how rows are owned and how the pivot row reaches each row's owner.
//!
//! # Example
//!
//! ```
//! use apsp_graph::Graph;
//!
//! let mut g = Graph::new(3)?;
//! g.set_edge(0, 1, 4)?;
//! g.set_edge(1, 2, 3)?;
//!
//! let result = apsp_solver::sequential::solve(&g);
//! assert_eq!(result.edge(0, 2)?, 7);
//! # Ok::<(), apsp_graph::Error>(())
//! ```

mod error;
mod kernel;
mod partition;
pub mod sequential;
pub mod threaded;

pub use error::Error;
pub use kernel::relax_row;
pub use partition::{Partition, RowOwner};
