//! Momentum-based signals.

use crate::extrema::{find_troughs, in_troughs, Order};
use crate::indicators::{Indicator, Momentum, Sma};

use super::cross::{crossed_above, crossed_above_level, crossed_below_level};

/// Signals derived from price momentum (`x[t] - x[t-period]`).
#[derive(Debug, Clone)]
pub struct MomentumSignals {
    price: Vec<f64>,
    mom: Vec<f64>,
}

impl MomentumSignals {
    pub const DEFAULT_PERIOD: usize = 24;

    pub fn new(price: &[f64], mom_period: usize) -> Self {
        Self {
            price: price.to_vec(),
            mom: Momentum::new(mom_period).compute(price),
        }
    }

    pub fn momentum(&self) -> &[f64] {
        &self.mom
    }

    /// Buy points confirmed by a higher-order trough.
    ///
    /// For each order-2 trough of the underlying (momentum when
    /// `use_momentum`, price otherwise), the next order-1 trough after it is a
    /// candidate; it fires when momentum there is not positive.
    pub fn in_trough_signal(&self, use_momentum: bool) -> Vec<bool> {
        let underlying = if use_momentum { &self.mom } else { &self.price };
        let troughs = find_troughs(underlying).positions;
        let second = in_troughs(underlying, Order::FIRST.next())
            .map(|set| set.positions)
            .unwrap_or_default();

        let mut out = vec![false; self.price.len()];
        for x in second {
            let next = troughs.partition_point(|&t| t <= x);
            if let Some(&buy) = troughs.get(next) {
                out[buy] = self.mom[buy] <= 0.0;
            }
        }
        out
    }

    /// Rolling mean of the momentum sign, in [-1, 1].
    pub fn consistency(&self, ma_period: usize) -> Vec<f64> {
        let signs: Vec<f64> = self.mom.iter().map(|&m| nan_sign(m)).collect();
        Sma::new(ma_period).compute(&signs)
    }

    /// Consistency crosses above `thresh` (defaults: 24, 0.9).
    pub fn buy_signal(&self, ma_period: usize, thresh: f64) -> Vec<bool> {
        crossed_above_level(&self.consistency(ma_period), thresh)
    }

    /// Consistency crosses below `thresh` (defaults: 24, 0.1).
    pub fn sell_signal(&self, ma_period: usize, thresh: f64) -> Vec<bool> {
        crossed_below_level(&self.consistency(ma_period), thresh)
    }

    /// Momentum rises above its own mean absolute deviation (default period 168).
    pub fn dying_momentum_signal(&self, ma_period: usize) -> Vec<bool> {
        let deviation: Vec<f64> = self.mom.iter().map(|m| m.abs()).collect();
        let mean_deviation = Sma::new(ma_period).compute(&deviation);
        crossed_above(&self.mom, &mean_deviation)
    }
}

/// -1, 0 or +1, keeping NaN.
fn nan_sign(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
