//! Wilder RSI, the oscillator reading behind `OscillatorSignals::rsi`.
//!
//! The first output lands at position `period`, once `period` price changes
//! have been seen. A flat window reads 0, as TA-Lib reports it.

use super::Indicator;

/// Running Wilder averages of upward and downward price moves.
#[derive(Debug, Clone, Copy)]
struct MoveAverages {
    up: f64,
    down: f64,
}

impl MoveAverages {
    /// Simple means over the seed changes.
    fn seed(changes: &[f64]) -> Self {
        let len = changes.len() as f64;
        Self {
            up: changes.iter().map(|c| c.max(0.0)).sum::<f64>() / len,
            down: changes.iter().map(|c| (-c).max(0.0)).sum::<f64>() / len,
        }
    }

    fn absorb(&mut self, change: f64, period: f64) {
        self.up += (change.max(0.0) - self.up) / period;
        self.down += ((-change).max(0.0) - self.down) / period;
    }

    /// `100 * up / (up + down)`, 0 when nothing moved.
    fn reading(self) -> f64 {
        let total = self.up + self.down;
        if total == 0.0 {
            0.0
        } else {
            100.0 * self.up / total
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, values: &[f64]) -> Vec<f64> {
        let mut out = vec![f64::NAN; values.len()];
        let changes: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
        if changes.len() < self.period {
            return out;
        }

        let (seed, rest) = changes.split_at(self.period);
        if seed.iter().any(|c| c.is_nan()) {
            return out;
        }
        let mut averages = MoveAverages::seed(seed);
        out[self.period] = averages.reading();

        // A gap breaks the smoothing chain, so everything after it stays NaN.
        let period = self.period as f64;
        for (slot, &change) in out[self.period + 1..].iter_mut().zip(rest) {
            if change.is_nan() {
                break;
            }
            averages.absorb(change, period);
            *slot = averages.reading();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn steady_rise_reads_100_and_steady_fall_reads_0() {
        let up = Rsi::new(4).compute(&[10.0, 11.0, 12.5, 13.0, 15.0, 16.0]);
        assert!(up[3].is_nan());
        assert_approx(up[4], 100.0, DEFAULT_EPSILON);
        assert_approx(up[5], 100.0, DEFAULT_EPSILON);

        let down = Rsi::new(2).compute(&[9.0, 8.0, 6.0, 5.5]);
        assert_approx(down[2], 0.0, DEFAULT_EPSILON);
        assert_approx(down[3], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn flat_window_reads_zero() {
        let out = Rsi::new(2).compute(&[7.0, 7.0, 7.0]);
        assert_approx(out[2], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn seed_then_wilder_smoothing() {
        // Changes +2, -1, +3, -2 with period 2.
        let out = Rsi::new(2).compute(&[10.0, 12.0, 11.0, 14.0, 12.0]);

        // Seed: up 1.0, down 0.5.
        assert_approx(out[2], 100.0 * 1.0 / 1.5, 1e-9);
        // +3: up (1 + 3) / 2 = 2.0, down 0.25.
        assert_approx(out[3], 100.0 * 2.0 / 2.25, 1e-9);
        // -2: up 1.0, down (0.25 + 2) / 2 = 1.125.
        assert_approx(out[4], 100.0 * 1.0 / 2.125, 1e-9);
    }

    #[test]
    fn readings_stay_within_0_and_100() {
        let prices = [50.0, 57.0, 49.0, 61.0, 44.0, 66.0, 40.0, 71.0, 38.0];
        for v in Rsi::new(3).compute(&prices).into_iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn gap_in_seed_leaves_everything_nan() {
        let out = Rsi::new(2).compute(&[1.0, f64::NAN, 3.0, 4.0, 5.0]);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn gap_after_seed_stops_the_readings() {
        let out = Rsi::new(2).compute(&[1.0, 2.0, 3.0, f64::NAN, 5.0, 6.0]);
        assert!(!out[2].is_nan());
        assert!(out[3..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn short_input_is_all_warm_up() {
        assert!(Rsi::default().compute(&[1.0; 14]).iter().all(|v| v.is_nan()));
        assert_eq!(Rsi::default().lookback(), 14);
        assert_eq!(Rsi::default().name(), "rsi_14");
    }
}
