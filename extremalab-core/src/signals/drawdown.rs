//! Limited-memory drawdown signals.

use crate::indicators::{Indicator, RollingMax};

use super::cross::crossed_above_level;

#[derive(Debug, Clone)]
pub struct DrawdownSignals {
    price: Vec<f64>,
}

impl DrawdownSignals {
    pub const DEFAULT_PERIOD: usize = 84;

    pub fn new(price: &[f64]) -> Self {
        Self {
            price: price.to_vec(),
        }
    }

    /// `1 - price / max(price over the last dd_period points)`.
    pub fn lm_drawdown(&self, dd_period: usize) -> Vec<f64> {
        let peak = RollingMax::new(dd_period).compute(&self.price);
        self.price
            .iter()
            .zip(&peak)
            .map(|(p, m)| 1.0 - p / m)
            .collect()
    }

    /// Drawdown crosses above `thresh` (defaults 84, 0.2).
    pub fn drawdown_buy_signal(&self, dd_period: usize, thresh: f64) -> Vec<bool> {
        crossed_above_level(&self.lm_drawdown(dd_period), thresh)
    }
}
