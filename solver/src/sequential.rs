//! Single-threaded Floyd-Warshall, the correctness oracle for the
//! parallel variants.

use apsp_graph::Graph;

use crate::kernel::relax_row;

/// Computes all-pairs shortest paths on a copy of `graph`.
///
/// After iteration k, `dist[i][j]` is the shortest i→j path using only
/// intermediates from `{0..=k}`; after the last iteration every pair is
/// final. The pivot row is refreshed into a reusable buffer once per
/// iteration; row k itself cannot change during iteration k, since its
/// own relaxation goes through `dist[k][k] = 0`.
///
/// The graph is assumed free of negative-weight cycles; in their
/// presence the output is unspecified.
pub fn solve(graph: &Graph) -> Graph {
    let v = graph.vertex_count();
    let mut result = graph.clone();
    let mut pivot = vec![0i64; v];

    for k in 0..v {
        pivot.copy_from_slice(result.row(k));
        for i in 0..v {
            relax_row(result.row_mut(i), k, &pivot);
        }
    }

    result
}
