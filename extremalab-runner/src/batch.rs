//! Batch labeling: degree labels, optimal signals and strength for every
//! symbol of a universe.

use std::borrow::Cow;

use log::info;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use extremalab_core::annotate::{annotate_degrees_with, DegreeLabels};
use extremalab_core::data::{resample, ResampleError};
use extremalab_core::domain::{Bar, SeriesError, TimeSeries};
use extremalab_core::signals::{optimal_signals, SignalTable};
use extremalab_core::transform::pt_to_strength;

use crate::config::{ConfigError, RunConfig, RunId};

/// Errors from batch labeling.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("symbol '{symbol}': {source}")]
    Series {
        symbol: String,
        #[source]
        source: SeriesError,
    },
    #[error("symbol '{symbol}': {source}")]
    Resample {
        symbol: String,
        #[source]
        source: ResampleError,
    },
    #[error("serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything computed for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolLabels {
    pub symbol: String,
    /// Bars labeled, after resampling.
    pub bar_count: usize,
    pub degrees: DegreeLabels,
    pub signals: SignalTable,
    /// Gaussian-smoothed `pt` column.
    pub strength: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub run_id: RunId,
    /// One entry per input, in input order.
    pub symbols: Vec<SymbolLabels>,
}

impl BatchResult {
    pub fn get(&self, symbol: &str) -> Option<&SymbolLabels> {
        self.symbols.iter().find(|s| s.symbol == symbol)
    }

    pub fn to_json(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Label one symbol's bars.
pub fn label_symbol(config: &RunConfig, symbol: &str, bars: &[Bar]) -> Result<SymbolLabels, RunError> {
    let bars: Cow<'_, [Bar]> = match &config.resample {
        Some(r) => Cow::Owned(resample(bars, r.period(), r.volume_clip).map_err(|source| {
            RunError::Resample {
                symbol: symbol.to_string(),
                source,
            }
        })?),
        None => Cow::Borrowed(bars),
    };
    let closes = TimeSeries::closes(&bars).map_err(|source| RunError::Series {
        symbol: symbol.to_string(),
        source,
    })?;

    let annotation = &config.annotation;
    let degrees = annotate_degrees_with(&closes, &annotation.scanner());
    let signals = optimal_signals(&closes, annotation.signal_order, annotation.conflict);
    let strength = pt_to_strength(&degrees.pt, annotation.strength_sigma);

    let top_degree = degrees.pt.iter().map(|p| p.unsigned_abs()).max().unwrap_or(0);
    info!(
        "labeled {symbol}: {} bars, top degree {top_degree}, {} signal changes",
        closes.len(),
        signals.len()
    );

    Ok(SymbolLabels {
        symbol: symbol.to_string(),
        bar_count: closes.len(),
        degrees,
        signals,
        strength,
    })
}

/// Label every `(symbol, bars)` input. The first failing symbol aborts the run.
pub fn label_universe(config: &RunConfig, inputs: &[(String, Vec<Bar>)]) -> Result<BatchResult, RunError> {
    config.validate()?;

    let symbols = if config.parallel {
        inputs
            .par_iter()
            .map(|(symbol, bars)| label_symbol(config, symbol, bars))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        inputs
            .iter()
            .map(|(symbol, bars)| label_symbol(config, symbol, bars))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(BatchResult {
        run_id: config.run_id(),
        symbols,
    })
}
