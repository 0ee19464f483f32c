//! Oscillator readings: Bollinger band position and RSI.

use crate::indicators::{Bollinger, BollingerBands, Indicator, Rsi};

#[derive(Debug, Clone)]
pub struct OscillatorSignals {
    price: Vec<f64>,
    bands: BollingerBands,
    rsi: Vec<f64>,
}

impl OscillatorSignals {
    /// Bands with the default (5, 2.0) parameters and a 14-period RSI.
    pub fn new(price: &[f64]) -> Self {
        Self {
            price: price.to_vec(),
            bands: Bollinger::bands(
                Bollinger::DEFAULT_PERIOD,
                Bollinger::DEFAULT_MULTIPLIER,
                price,
            ),
            rsi: Rsi::default().compute(price),
        }
    }

    pub fn bands(&self) -> &BollingerBands {
        &self.bands
    }

    pub fn rsi(&self) -> &[f64] {
        &self.rsi
    }

    /// `(price - middle) / (upper - lower)`: 0 at the middle band, ±0.5 at
    /// the outer bands. Zero-width bands give NaN or ±inf.
    pub fn bband_position(&self) -> Vec<f64> {
        self.price
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let range = self.bands.upper[i] - self.bands.lower[i];
                (p - self.bands.middle[i]) / range
            })
            .collect()
    }
}
