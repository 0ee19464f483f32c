//! TimeSeries: numeric values on a strictly increasing time index.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bar::Bar;

/// Errors raised while constructing a [`TimeSeries`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("index has {index} entries but {values} values were supplied")]
    LengthMismatch { index: usize, values: usize },

    #[error("index is not strictly increasing at position {0}")]
    NonIncreasingIndex(usize),
}

/// An ordered sequence of values paired 1:1 with timestamps.
///
/// Immutable once built: every labeling pass borrows it and returns a new
/// structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    index: Vec<NaiveDateTime>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(index: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if index.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        if let Some(pos) = index.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SeriesError::NonIncreasingIndex(pos + 1));
        }
        Ok(Self { index, values })
    }

    /// Build a series on a regular grid starting at `start`.
    pub fn regular(start: NaiveDateTime, step: Duration, values: Vec<f64>) -> Self {
        assert!(step > Duration::zero(), "series step must be positive");
        let index = (0..values.len())
            .map(|i| start + grid_offset(step, i))
            .collect();
        Self { index, values }
    }

    /// Extract one field of each bar as a series on the bars' timestamps.
    pub fn from_bars(bars: &[Bar], field: impl Fn(&Bar) -> f64) -> Result<Self, SeriesError> {
        let index = bars.iter().map(|b| b.time).collect();
        let values = bars.iter().map(field).collect();
        Self::new(index, values)
    }

    /// Close prices of `bars`.
    pub fn closes(bars: &[Bar]) -> Result<Self, SeriesError> {
        Self::from_bars(bars, |b| b.close)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[NaiveDateTime] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn time_at(&self, position: usize) -> Option<NaiveDateTime> {
        self.index.get(position).copied()
    }

    pub fn value_at(&self, position: usize) -> Option<f64> {
        self.values.get(position).copied()
    }
}

/// Hourly series starting 2024-01-02 00:00, for tests.
#[cfg(test)]
pub fn make_series(values: &[f64]) -> TimeSeries {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    TimeSeries::regular(start, Duration::hours(1), values.to_vec())
}

/// `step * i` without narrowing `i` to the `i32` that `Duration` multiplies by.
fn grid_offset(step: Duration, i: usize) -> Duration {
    let i = i as i64;
    let whole = Duration::seconds(step.num_seconds());
    let nanos = (step - whole).num_nanoseconds().unwrap_or(0);
    Duration::seconds(step.num_seconds() * i) + Duration::nanoseconds(nanos * i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_accepts_strictly_increasing_index() {
        let s = TimeSeries::new(vec![t(0), t(1), t(2)], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.time_at(1), Some(t(1)));
        assert_eq!(s.value_at(2), Some(3.0));
        assert_eq!(s.value_at(3), None);
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = TimeSeries::new(vec![t(0), t(1)], vec![1.0]).unwrap_err();
        assert_eq!(err, SeriesError::LengthMismatch { index: 2, values: 1 });
    }

    #[test]
    fn new_rejects_duplicate_timestamp() {
        let err = TimeSeries::new(vec![t(0), t(1), t(1)], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, SeriesError::NonIncreasingIndex(2));
    }

    #[test]
    fn empty_series_is_valid() {
        let s = TimeSeries::new(vec![], vec![]).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn regular_grid_spacing() {
        let s = make_series(&[5.0, 6.0, 7.0]);
        assert_eq!(s.index(), &[t(0), t(1), t(2)]);
        assert_eq!(s.values(), &[5.0, 6.0, 7.0]);
    }

    #[test]
    fn grid_offset_does_not_wrap_past_i32() {
        let i = i32::MAX as usize + 2;
        assert_eq!(
            grid_offset(Duration::seconds(1), i),
            Duration::seconds(i32::MAX as i64 + 2)
        );
        assert_eq!(grid_offset(Duration::minutes(1), 3_000_000_000), Duration::minutes(3_000_000_000));
    }

    #[test]
    fn grid_offset_keeps_subsecond_steps() {
        assert_eq!(grid_offset(Duration::milliseconds(1500), 3), Duration::milliseconds(4500));
        assert_eq!(grid_offset(Duration::hours(1), 0), Duration::zero());
    }

    #[test]
    fn closes_follow_bar_times() {
        let bars: Vec<Bar> = (0..3)
            .map(|h| Bar {
                time: t(h),
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: 1.5 + h as f64,
                volume: 10.0,
                trades: None,
            })
            .collect();
        let s = TimeSeries::closes(&bars).unwrap();
        assert_eq!(s.values(), &[1.5, 2.5, 3.5]);
        assert_eq!(s.time_at(2), Some(t(2)));
    }
}
