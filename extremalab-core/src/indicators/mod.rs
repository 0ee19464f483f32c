//! Indicator collaborators consumed by the signal families.
//!
//! Indicators are pure functions: a numeric series and a window in, a series
//! of the same length out. Warm-up positions are `f64::NAN`, and a NaN inside
//! a window makes that output NaN.

pub mod bollinger;
pub mod momentum;
pub mod rolling_max;
pub mod rsi;
pub mod sma;

pub use bollinger::{Bollinger, BollingerBand, BollingerBands};
pub use momentum::Momentum;
pub use rolling_max::RollingMax;
pub use rsi::Rsi;
pub use sma::Sma;

/// Trait for indicators.
///
/// # Look-ahead contamination guard
/// No output at index t may depend on input from t+1 or later.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "rsi_14").
    fn name(&self) -> &str;

    /// Number of leading outputs that are warm-up NaN.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the whole input. Output length equals input length.
    fn compute(&self, values: &[f64]) -> Vec<f64>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
