//! The relaxation kernel shared by every solver variant.

use apsp_graph::INF;

/// Relaxes one matrix row against the pivot row for iteration `k`.
///
/// For every column j: if `row[k]` and `pivot_row[j]` are both finite and
/// their sum is strictly shorter than `row[j]`, the sum replaces `row[j]`.
/// This is the only place relaxation logic lives; the sequential,
/// threaded and distributed coordinators all call it identically.
///
/// `INF` is far enough below `i64::MAX` that `through + via` cannot
/// overflow even when both operands are real finite sums of weights.
pub fn relax_row(row: &mut [i64], k: usize, pivot_row: &[i64]) {
    debug_assert_eq!(row.len(), pivot_row.len());
    let through = row[k];
    if through == INF {
        return;
    }
    for (dist, &via) in row.iter_mut().zip(pivot_row) {
        if via != INF && through + via < *dist {
            *dist = through + via;
        }
    }
}
