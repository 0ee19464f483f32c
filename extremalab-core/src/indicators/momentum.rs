//! Price change over a fixed number of bars, in price units.
//!
//! `MomentumSignals` confirms trough entries on its sign and averages that
//! sign for its consistency signals.

use super::Indicator;

#[derive(Debug, Clone)]
pub struct Momentum {
    period: usize,
    name: String,
}

impl Momentum {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "Momentum period must be >= 1");
        Self {
            period,
            name: format!("momentum_{period}"),
        }
    }
}

impl Indicator for Momentum {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    /// `x[t] - x[t - period]`. NaN on either end gives NaN.
    fn compute(&self, values: &[f64]) -> Vec<f64> {
        let warm_up = self.period.min(values.len());
        let changes = values
            .iter()
            .skip(self.period)
            .zip(values)
            .map(|(now, then)| now - then);
        std::iter::repeat(f64::NAN).take(warm_up).chain(changes).collect()
    }
}
