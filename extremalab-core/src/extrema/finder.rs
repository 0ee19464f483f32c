//! First-order extrema: peaks at the end of a non-decreasing run that is
//! followed by a strict drop.
//!
//! Troughs are defined as the peaks of the negated series with the values
//! negated back. Endpoints are never reported.

use serde::{Deserialize, Serialize};

/// Result of one extrema pass.
///
/// `positions` are offsets into the slice the pass ran on, strictly increasing
/// and inside `[1, len - 2]`. `values[i]` is the input value at `positions[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtremumSet {
    pub positions: Vec<usize>,
    pub values: Vec<f64>,
}

impl ExtremumSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub(crate) fn negated(mut self) -> Self {
        for v in &mut self.values {
            *v = -*v;
        }
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Flat,
    Rising,
    Falling,
}

/// Find local peaks of `x`.
///
/// A plateau belongs to the rise, so the last flat point before a drop is the
/// peak. NaN comparisons are false and count as "not rising".
pub fn find_peaks(x: &[f64]) -> ExtremumSet {
    let mut direction = Direction::Flat;
    let mut peaks = ExtremumSet::default();

    for (i, pair) in x.windows(2).enumerate() {
        if pair[0] <= pair[1] {
            direction = Direction::Rising;
        } else {
            if direction == Direction::Rising {
                peaks.positions.push(i);
                peaks.values.push(pair[0]);
            }
            direction = Direction::Falling;
        }
    }

    peaks
}

/// Find local troughs of `x`: `find_peaks(-x)` with values negated back.
pub fn find_troughs(x: &[f64]) -> ExtremumSet {
    find_peaks(&negate(x)).negated()
}

pub(crate) fn negate(x: &[f64]) -> Vec<f64> {
    x.iter().map(|v| -v).collect()
}
