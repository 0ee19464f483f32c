//! Bar resampling with volume clipping.
//!
//! Bars are forward-filled field by field, grouped into epoch-aligned buckets
//! of a fixed period, aggregated OHLCV-style, and the bucket volumes are
//! clipped to a quantile band. Buckets with no input bar become void bars.

use chrono::{Duration, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Bar;

#[derive(Debug, Error, PartialEq)]
pub enum ResampleError {
    #[error("resample period must be at least one millisecond")]
    PeriodTooShort,

    #[error("volume clip quantiles must satisfy 0 <= lower <= upper <= 1, got [{lower}, {upper}]")]
    InvalidClip { lower: f64, upper: f64 },

    #[error("bar times are not strictly increasing at position {0}")]
    NonIncreasingTime(usize),
}

/// Quantile band used to clip resampled volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeClip {
    pub lower_quantile: f64,
    pub upper_quantile: f64,
}

impl VolumeClip {
    pub fn new(lower_quantile: f64, upper_quantile: f64) -> Self {
        let clip = Self {
            lower_quantile,
            upper_quantile,
        };
        assert!(
            clip.is_valid(),
            "volume clip quantiles must satisfy 0 <= lower <= upper <= 1"
        );
        clip
    }

    /// Deserialized clips bypass [`VolumeClip::new`], so callers check here.
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.lower_quantile)
            && (0.0..=1.0).contains(&self.upper_quantile)
            && self.lower_quantile <= self.upper_quantile
    }

    /// Crypto venue preset: 5% to 99.5%.
    pub fn binance() -> Self {
        Self::new(0.05, 0.995)
    }

    /// Equity feed preset: only the top 0.5% is clipped.
    pub fn yahoo() -> Self {
        Self::new(0.0, 0.995)
    }

    /// Leaves volume untouched.
    pub fn none() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Default for VolumeClip {
    fn default() -> Self {
        Self::binance()
    }
}

/// Resample `bars` to buckets of `period`.
///
/// Bar times must be strictly increasing. The period must span at least one
/// millisecond.
pub fn resample(
    bars: &[Bar],
    period: Duration,
    clip: VolumeClip,
) -> Result<Vec<Bar>, ResampleError> {
    let period_ms = period.num_milliseconds();
    if period_ms < 1 {
        return Err(ResampleError::PeriodTooShort);
    }
    if !clip.is_valid() {
        return Err(ResampleError::InvalidClip {
            lower: clip.lower_quantile,
            upper: clip.upper_quantile,
        });
    }
    if let Some(pos) = bars.windows(2).position(|w| w[0].time >= w[1].time) {
        return Err(ResampleError::NonIncreasingTime(pos + 1));
    }
    if bars.is_empty() {
        return Ok(Vec::new());
    }

    let filled = forward_fill(bars);
    let bucket_of = |t: NaiveDateTime| t.and_utc().timestamp_millis().div_euclid(period_ms);

    let first_bucket = bucket_of(filled[0].time);
    let last_bucket = bucket_of(filled[filled.len() - 1].time);
    let first_ms = filled[0].time.and_utc().timestamp_millis();
    let origin = filled[0].time - Duration::milliseconds(first_ms.rem_euclid(period_ms));

    let mut out: Vec<Bar> = (0..=(last_bucket - first_bucket))
        .map(|k| Bar::void(origin + Duration::milliseconds(k * period_ms)))
        .collect();
    for bar in &filled {
        let slot = (bucket_of(bar.time) - first_bucket) as usize;
        merge(&mut out[slot], bar);
    }

    clip_volume(&mut out, clip);
    Ok(out)
}

fn forward_fill(bars: &[Bar]) -> Vec<Bar> {
    let mut out: Vec<Bar> = Vec::with_capacity(bars.len());
    for bar in bars {
        let mut bar = bar.clone();
        if let Some(prev) = out.last() {
            fill_nan(&mut bar.open, prev.open);
            fill_nan(&mut bar.high, prev.high);
            fill_nan(&mut bar.low, prev.low);
            fill_nan(&mut bar.close, prev.close);
            fill_nan(&mut bar.volume, prev.volume);
            if bar.trades.is_none() {
                bar.trades = prev.trades;
            }
        }
        out.push(bar);
    }
    out
}

fn fill_nan(field: &mut f64, prev: f64) {
    if field.is_nan() {
        *field = prev;
    }
}

/// Fold `bar` into the bucket accumulator. NaN fields are skipped.
fn merge(acc: &mut Bar, bar: &Bar) {
    if acc.open.is_nan() {
        acc.open = bar.open;
    }
    if !bar.high.is_nan() && (acc.high.is_nan() || bar.high > acc.high) {
        acc.high = bar.high;
    }
    if !bar.low.is_nan() && (acc.low.is_nan() || bar.low < acc.low) {
        acc.low = bar.low;
    }
    if !bar.close.is_nan() {
        acc.close = bar.close;
    }
    if !bar.volume.is_nan() {
        acc.volume += bar.volume;
    }
    if let Some(n) = bar.trades {
        acc.trades = Some(acc.trades.unwrap_or(0) + n);
    }
}

fn clip_volume(bars: &mut [Bar], clip: VolumeClip) {
    let mut volumes: Vec<f64> = bars.iter().map(|b| b.volume).filter(|v| !v.is_nan()).collect();
    if volumes.is_empty() {
        return;
    }
    volumes.sort_by(f64::total_cmp);

    let lower = quantile(&volumes, clip.lower_quantile);
    let upper = quantile(&volumes, clip.upper_quantile);
    debug!("clipping resampled volume to [{lower}, {upper}]");

    for bar in bars.iter_mut() {
        bar.volume = bar.volume.clamp(lower, upper);
    }
}

/// Linearly interpolated quantile of sorted, non-empty `values`.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
