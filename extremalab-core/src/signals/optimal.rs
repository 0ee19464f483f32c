//! Optimal entry signals from high-order extrema.
//!
//! Peaks of the configured order are sells (-1), troughs are buys (+1). The
//! signal is forward-filled into a running position and compressed to the
//! rows where the signal changes sign.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Bar, SeriesError, TimeSeries};
use crate::extrema::{in_peaks, in_troughs, Order};

/// Resolution for a position that is both a peak and a trough of the
/// configured order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// The buy wins (troughs are applied after peaks).
    #[default]
    PreferTrough,
    /// The sell wins.
    PreferPeak,
    /// Neither fires.
    Skip,
}

/// A row where the entry signal changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    pub position: usize,
    pub time: NaiveDateTime,
    pub value: f64,
    pub signal: i8,
    /// Forward-filled running position at this row.
    pub pos: i8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalTable {
    rows: Vec<SignalRow>,
}

impl SignalTable {
    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignalRow> {
        self.rows.iter()
    }
}

/// Sparse signal over `len` rows: -1 at peaks, +1 at troughs, `None` elsewhere.
pub fn raw_signal(
    len: usize,
    peaks: &[usize],
    troughs: &[usize],
    policy: ConflictPolicy,
) -> Vec<Option<i8>> {
    let mut signal = vec![None; len];

    for &p in peaks {
        signal[p] = Some(-1);
    }

    for &t in troughs {
        signal[t] = match (policy, signal[t]) {
            (ConflictPolicy::PreferTrough, _) | (_, None) => Some(1),
            (ConflictPolicy::PreferPeak, existing) => existing,
            (ConflictPolicy::Skip, Some(_)) => None,
        };
    }

    signal
}

/// Carry the last signal forward; rows before the first signal are 0.
pub fn forward_fill(signal: &[Option<i8>]) -> Vec<i8> {
    let mut last = 0;
    signal
        .iter()
        .map(|s| {
            if let Some(v) = s {
                last = *v;
            }
            last
        })
        .collect()
}

/// Signal changes from the extrema of `order`.
///
/// A track whose order is unsupported by the data contributes no rows, so
/// short inputs yield a one-sided or empty table rather than an error.
pub fn optimal_signals(series: &TimeSeries, order: Order, policy: ConflictPolicy) -> SignalTable {
    let peaks = in_peaks(series.values(), order).unwrap_or_default();
    let troughs = in_troughs(series.values(), order).unwrap_or_default();

    let signal = raw_signal(series.len(), &peaks.positions, &troughs.positions, policy);
    let pos = forward_fill(&signal);

    let mut rows: Vec<SignalRow> = Vec::new();
    for (position, s) in signal.iter().enumerate() {
        let Some(s) = *s else { continue };
        if s == 0 || rows.last().is_some_and(|r| r.signal == s) {
            continue;
        }
        rows.push(SignalRow {
            position,
            time: series.index()[position],
            value: series.values()[position],
            signal: s,
            pos: pos[position],
        });
    }

    SignalTable { rows }
}

/// [`optimal_signals`] on bar closes with the default conflict policy.
pub fn optimal_signals_from_bars(bars: &[Bar], order: Order) -> Result<SignalTable, SeriesError> {
    let closes = TimeSeries::closes(bars)?;
    Ok(optimal_signals(&closes, order, ConflictPolicy::default()))
}
