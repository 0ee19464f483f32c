//! Rolling maximum over a lookback window.
//!
//! max(x[t-period+1..=t]); a NaN inside the window yields NaN.
//! Lookback: period - 1.

use super::Indicator;

#[derive(Debug, Clone)]
pub struct RollingMax {
    period: usize,
    name: String,
}

impl RollingMax {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RollingMax period must be >= 1");
        Self {
            period,
            name: format!("rolling_max_{period}"),
        }
    }
}

impl Indicator for RollingMax {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        for i in (self.period - 1)..n {
            let window = &values[i + 1 - self.period..=i];
            if window.iter().any(|v| v.is_nan()) {
                continue;
            }
            result[i] = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolling_max_basic() {
        let result = RollingMax::new(3).compute(&[1.0, 5.0, 2.0, 3.0, 1.0, 0.5]);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(&result[2..], &[5.0, 5.0, 3.0, 3.0]);
    }

    #[test]
    fn rolling_max_nan_window() {
        let result = RollingMax::new(2).compute(&[1.0, f64::NAN, 2.0, 3.0]);
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert_eq!(result[3], 3.0);
    }

    #[test]
    fn rolling_max_lookback() {
        assert_eq!(RollingMax::new(84).lookback(), 83);
    }
}
