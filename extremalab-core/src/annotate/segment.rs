//! Trade-segment labeling: turn sparse trade records into a dense direction
//! per timestamp.
//!
//! Inside a trade the direction is the sign of its pnl. The gap before a
//! trade is labeled with the reversal of the previous trade's direction, and
//! the tail after the last trade with the reversal of the last direction.
//! Rows that end up 0 are dropped.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{TimeSeries, TradeSegment};

/// Rows of the source series that carry a non-zero direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionLabels {
    /// Position of each row in the source series.
    pub positions: Vec<usize>,
    pub index: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
    pub direction: Vec<i8>,
}

impl DirectionLabels {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Direction at a source position, or `None` if that row was dropped.
    pub fn direction_at(&self, position: usize) -> Option<i8> {
        self.positions
            .binary_search(&position)
            .ok()
            .map(|i| self.direction[i])
    }
}

/// Dense direction for `len` rows, zeros included.
///
/// `records` must be ordered by entry and non-overlapping. Ranges are
/// half-open and clamped to `len`.
pub fn dense_trade_direction(len: usize, records: &[TradeSegment]) -> Vec<i8> {
    let mut direction = vec![0i8; len];
    let mut previous_exit = 0;
    let mut previous_dir = 0i8;

    for record in records {
        let dir = record.direction();
        fill(&mut direction, previous_exit, record.entry_index, -previous_dir);
        fill(&mut direction, record.entry_index, record.exit_index, dir);
        previous_exit = record.exit_index;
        previous_dir = dir;
    }

    if !records.is_empty() {
        fill(&mut direction, previous_exit, len, -previous_dir);
    }

    direction
}

/// Label `series` from `records`, keeping only rows with a non-zero direction.
pub fn annotate_trade_direction(series: &TimeSeries, records: &[TradeSegment]) -> DirectionLabels {
    let dense = dense_trade_direction(series.len(), records);
    let mut labels = DirectionLabels::default();

    for (position, &dir) in dense.iter().enumerate() {
        if dir == 0 {
            continue;
        }
        labels.positions.push(position);
        labels.index.push(series.index()[position]);
        labels.values.push(series.values()[position]);
        labels.direction.push(dir);
    }

    labels
}

fn fill(labels: &mut [i8], start: usize, end: usize, value: i8) {
    let end = end.min(labels.len());
    if start < end {
        labels[start..end].fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::make_series;

    fn seg(entry: usize, exit: usize, pnl: f64) -> TradeSegment {
        TradeSegment::new(entry, exit, pnl)
    }

    #[test]
    fn two_trades_over_ten_rows() {
        let records = [seg(2, 4, 1.0), seg(6, 8, -1.0)];
        let dense = dense_trade_direction(10, &records);
        // Gap before the first trade reverses an implicit 0, so it stays unlabeled.
        assert_eq!(dense, vec![0, 0, 1, 1, -1, -1, -1, -1, 1, 1]);
    }

    #[test]
    fn zero_rows_are_dropped() {
        let series = make_series(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0]);
        let records = [seg(2, 4, 1.0), seg(6, 8, -1.0)];
        let labels = annotate_trade_direction(&series, &records);

        assert_eq!(labels.positions, vec![2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(labels.direction, vec![1, 1, -1, -1, -1, -1, 1, 1]);
        assert_eq!(labels.values[0], 12.0);
        assert_eq!(labels.index[0], series.index()[2]);
        assert_eq!(labels.direction_at(1), None);
        assert_eq!(labels.direction_at(8), Some(1));
    }

    #[test]
    fn empty_records_give_empty_table() {
        let series = make_series(&[1.0, 2.0, 3.0]);
        let labels = annotate_trade_direction(&series, &[]);
        assert!(labels.is_empty());
        assert_eq!(dense_trade_direction(3, &[]), vec![0, 0, 0]);
    }

    #[test]
    fn trade_from_start_leaves_no_gap() {
        let dense = dense_trade_direction(5, &[seg(0, 2, -3.0)]);
        assert_eq!(dense, vec![-1, -1, 1, 1, 1]);
    }

    #[test]
    fn flat_trade_labels_nothing_inside() {
        // Zero pnl: segment and tail are both 0.
        let dense = dense_trade_direction(4, &[seg(1, 3, 0.0)]);
        assert_eq!(dense, vec![0, 0, 0, 0]);
    }

    #[test]
    fn ranges_are_clamped_to_length() {
        let dense = dense_trade_direction(4, &[seg(2, 9, 1.0)]);
        assert_eq!(dense, vec![0, 0, 1, 1]);
    }

    #[test]
    fn back_to_back_trades() {
        let records = [seg(0, 3, 1.0), seg(3, 5, 1.0)];
        let dense = dense_trade_direction(7, &records);
        assert_eq!(dense, vec![1, 1, 1, 1, 1, -1, -1]);
    }
}
