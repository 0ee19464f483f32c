//! Moving-average ratio signals on price (dump/recovery) and volume.

use crate::indicators::{Indicator, Sma};

use super::cross::{and, crossed_above_level, crossed_below_level};

fn divide(num: &[f64], den: &[f64]) -> Vec<f64> {
    num.iter().zip(den).map(|(n, d)| n / d).collect()
}

fn above(x: &[f64], level: f64) -> Vec<bool> {
    x.iter().map(|v| *v > level).collect()
}

/// Price stretched far below its moving average.
#[derive(Debug, Clone)]
pub struct DumpSignals {
    /// MA(price) / price
    ma_ratio: Vec<f64>,
    /// MA(ma_ratio) / ma_ratio
    dma_ratio: Vec<f64>,
}

impl DumpSignals {
    pub const DEFAULT_MA_PERIOD: usize = 84;
    pub const DEFAULT_DMA_PERIOD: usize = 3;

    pub fn new(price: &[f64], ma_period: usize, dma_period: usize) -> Self {
        let ma_ratio = divide(&Sma::new(ma_period).compute(price), price);
        let dma_ratio = divide(&Sma::new(dma_period).compute(&ma_ratio), &ma_ratio);
        Self {
            ma_ratio,
            dma_ratio,
        }
    }

    pub fn ma_ratio(&self) -> &[f64] {
        &self.ma_ratio
    }

    pub fn dma_ratio(&self) -> &[f64] {
        &self.dma_ratio
    }

    /// The MA ratio crosses above `thresh` (default 1.2).
    pub fn dump_sell_signal(&self, thresh: f64) -> Vec<bool> {
        crossed_above_level(&self.ma_ratio, thresh)
    }

    /// Both ratios above their thresholds (defaults 1.15, 1.05).
    pub fn recovery_buy_signal(&self, ma_thresh: f64, dma_thresh: f64) -> Vec<bool> {
        and(
            &above(&self.ma_ratio, ma_thresh),
            &above(&self.dma_ratio, dma_thresh),
        )
    }
}

/// Volume surging relative to its moving average.
#[derive(Debug, Clone)]
pub struct VolumeSignals {
    /// volume / MA(volume)
    ma_ratio: Vec<f64>,
    /// ma_ratio / MA(ma_ratio)
    dma_ratio: Vec<f64>,
}

impl VolumeSignals {
    pub const DEFAULT_MA_PERIOD: usize = 42;
    pub const DEFAULT_DMA_PERIOD: usize = 3;

    pub fn new(volume: &[f64], ma_period: usize, dma_period: usize) -> Self {
        let ma_ratio = divide(volume, &Sma::new(ma_period).compute(volume));
        let dma_ratio = divide(&ma_ratio, &Sma::new(dma_period).compute(&ma_ratio));
        Self {
            ma_ratio,
            dma_ratio,
        }
    }

    pub fn ma_ratio(&self) -> &[f64] {
        &self.ma_ratio
    }

    pub fn dma_ratio(&self) -> &[f64] {
        &self.dma_ratio
    }

    /// Volume above `thresh` times its average (default 1.2).
    pub fn vol_up_signal(&self, thresh: f64) -> Vec<bool> {
        above(&self.ma_ratio, thresh)
    }

    /// Elevated volume whose acceleration fades (defaults 1.1, 1.05).
    pub fn vol_stabilise_signal(&self, ma_thresh: f64, dma_thresh: f64) -> Vec<bool> {
        and(
            &above(&self.ma_ratio, ma_thresh),
            &crossed_below_level(&self.dma_ratio, dma_thresh),
        )
    }
}
