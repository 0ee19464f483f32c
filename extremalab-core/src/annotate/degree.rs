//! Degree labeling: every point gets the highest order at which it is a peak
//! or a trough.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::TimeSeries;
use crate::extrema::{DegreeScanner, ExtremaScan};

/// Dense degree labels aligned to the source series.
///
/// - `peak`: 0, or the highest order at which the point is a peak
/// - `trough`: same for troughs
/// - `pt`: `peak` for peaks, `-trough` for troughs, 0 otherwise
///
/// The trough pass runs after the peak pass, so a point marked by both
/// carries `pt = -trough`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeLabels {
    pub index: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
    pub peak: Vec<u32>,
    pub trough: Vec<u32>,
    pub pt: Vec<i32>,
}

/// One row of [`DegreeLabels`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeRow {
    pub time: NaiveDateTime,
    pub value: f64,
    pub peak: u32,
    pub trough: u32,
    pub pt: i32,
}

impl DegreeLabels {
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn row(&self, position: usize) -> Option<DegreeRow> {
        Some(DegreeRow {
            time: *self.index.get(position)?,
            value: self.values[position],
            peak: self.peak[position],
            trough: self.trough[position],
            pt: self.pt[position],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = DegreeRow> + '_ {
        (0..self.len()).filter_map(|i| self.row(i))
    }

    /// Positions labeled as an extremum of at least `min_order`, signed like `pt`.
    pub fn extrema_at_least(&self, min_order: u32) -> Vec<(usize, i32)> {
        self.pt
            .iter()
            .enumerate()
            .filter(|(_, pt)| pt.unsigned_abs() >= min_order && **pt != 0)
            .map(|(i, pt)| (i, *pt))
            .collect()
    }
}

/// Label `series` using the default scanner.
pub fn annotate_degrees(series: &TimeSeries) -> DegreeLabels {
    annotate_degrees_with(series, &DegreeScanner::new())
}

pub fn annotate_degrees_with(series: &TimeSeries, scanner: &DegreeScanner) -> DegreeLabels {
    let scan = scanner.scan(series.values());
    let (peak, trough, pt) = label_scan(series.len(), &scan);

    DegreeLabels {
        index: series.index().to_vec(),
        values: series.values().to_vec(),
        peak,
        trough,
        pt,
    }
}

/// Spread a scan into dense `(peak, trough, pt)` columns of length `len`.
///
/// Orders are applied in ascending order so the highest order wins; the
/// peak track is applied in full before the trough track.
pub fn label_scan(len: usize, scan: &ExtremaScan) -> (Vec<u32>, Vec<u32>, Vec<i32>) {
    let mut peak = vec![0u32; len];
    let mut trough = vec![0u32; len];
    let mut pt = vec![0i32; len];

    for (order, positions) in scan.peaks.iter() {
        let degree = order.get() as u32;
        for &p in positions {
            peak[p] = degree;
            pt[p] = degree as i32;
        }
    }

    for (order, positions) in scan.troughs.iter() {
        let degree = order.get() as u32;
        for &p in positions {
            trough[p] = degree;
            pt[p] = -(degree as i32);
        }
    }

    (peak, trough, pt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::make_series;
    use crate::extrema::{Order, OrderedExtremaTable};

    const NESTED: [f64; 13] = [
        0.0, 3.0, 1.0, 5.0, 2.0, 4.0, 1.0, 7.0, 0.0, 2.0, 1.0, 6.0, 0.0,
    ];

    #[test]
    fn highest_order_wins() {
        let labels = annotate_degrees(&make_series(&NESTED));

        assert_eq!(labels.peak, vec![0, 1, 0, 2, 0, 1, 0, 2, 0, 1, 0, 1, 0]);
        assert_eq!(labels.trough, vec![0, 0, 1, 0, 1, 0, 1, 0, 2, 0, 1, 0, 0]);
        assert_eq!(
            labels.pt,
            vec![0, 1, -1, 2, -1, 1, -1, 2, -2, 1, -1, 1, 0]
        );
    }

    #[test]
    fn labels_align_with_series() {
        let series = make_series(&NESTED);
        let labels = annotate_degrees(&series);
        assert_eq!(labels.len(), series.len());
        assert_eq!(labels.index, series.index());
        let row = labels.row(7).unwrap();
        assert_eq!(row.value, 7.0);
        assert_eq!(row.peak, 2);
        assert_eq!(row.pt, 2);
        assert!(labels.row(13).is_none());
    }

    #[test]
    fn empty_series_gives_empty_labels() {
        let labels = annotate_degrees(&make_series(&[]));
        assert!(labels.is_empty());
        assert_eq!(labels.rows().count(), 0);
    }

    #[test]
    fn trough_pass_wins_pt_on_collision() {
        let first = Order::FIRST;
        let mut peaks = OrderedExtremaTable::new();
        peaks.insert(first, vec![1]);
        peaks.insert(first.next(), vec![1]);
        let mut troughs = OrderedExtremaTable::new();
        troughs.insert(first, vec![1, 2]);
        let scan = ExtremaScan {
            peaks,
            troughs,
            iterations: 2,
        };

        let (peak, trough, pt) = label_scan(4, &scan);
        assert_eq!(peak, vec![0, 2, 0, 0]);
        assert_eq!(trough, vec![0, 1, 1, 0]);
        assert_eq!(pt, vec![0, -1, -1, 0]);
    }

    #[test]
    fn extrema_at_least_filters_by_order() {
        let labels = annotate_degrees(&make_series(&NESTED));
        assert_eq!(labels.extrema_at_least(2), vec![(3, 2), (7, 2), (8, -2)]);
    }
}
