//! Distributed Floyd-Warshall over message-passing workers.
//!
//! `apsp-cluster` runs the same relaxation kernel as `apsp-solver`, but
//! across isolated worker tasks that share no memory. Matrix rows are
//! block-partitioned; each of the V pivot iterations is one collective
//! round in which the owner broadcasts the pivot row and everyone
//! relaxes its own rows, and a final gather reassembles the result on
//! the caller's side.
//!
//! # Failure semantics
//!
//! There is no partial-failure recovery. Any worker error trips a shared
//! abort signal observed inside every collective call; the whole run
//! fails and no partial result is returned.
//!
//! # Example
//!
//! ```no_run
//! use apsp_graph::Graph;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut g = Graph::new(3)?;
//!     g.set_edge(0, 1, 4)?;
//!     g.set_edge(1, 2, 3)?;
//!
//!     let result = apsp_cluster::solve(&g, 4).await?;
//!     assert_eq!(result.edge(0, 2)?, 7);
//!     Ok(())
//! }
//! ```

mod cluster;
mod comm;
mod error;
mod worker;

pub use cluster::solve;
pub use comm::{ChannelCollective, Collective, Frame, mesh};
pub use error::Error;
