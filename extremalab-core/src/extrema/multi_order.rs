//! Higher-order extrema by repeated reduction.
//!
//! Order k is the extrema of the order-(k-1) extrema *values*. Each pass
//! returns positions in the coordinate space of the array it ran on, so they
//! are composed back onto the original series with [`compose`].

use super::finder::{find_peaks, negate, ExtremumSet};
use super::order::Order;

/// Gather `outer[local[j]]` for every `j`.
///
/// `outer` maps positions of the previous order's array into the original
/// series; `local` are positions within that previous order's array. The
/// result is in original-series coordinates.
pub fn compose(outer: &[usize], local: &[usize]) -> Vec<usize> {
    local.iter().map(|&j| outer[j]).collect()
}

/// Peaks of `order`, positioned in `x`.
///
/// Returns `None` when a pass beyond the first finds no extrema: the data do
/// not support that order. Order 1 always returns `Some`, possibly empty.
pub fn in_peaks(x: &[f64], order: Order) -> Option<ExtremumSet> {
    let mut current = find_peaks(x);

    for _ in 1..order.get() {
        let local = find_peaks(&current.values);
        if local.is_empty() {
            return None;
        }
        current = ExtremumSet {
            positions: compose(&current.positions, &local.positions),
            values: local.values,
        };
    }

    Some(current)
}

/// Troughs of `order`: `in_peaks(-x, order)` with values negated back.
pub fn in_troughs(x: &[f64], order: Order) -> Option<ExtremumSet> {
    in_peaks(&negate(x), order).map(ExtremumSet::negated)
}
