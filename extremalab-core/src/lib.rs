//! ExtremaLab Core: multi-order extrema, directional labels, entry signals.
//!
//! This crate contains:
//! - Domain types (bars, time series, trade segments)
//! - First-order extrema finding and order-k reduction with index composition
//! - Degree scanning up to the highest order each track supports
//! - Directional annotation (degree form and trade-segment form)
//! - Optimal entry signals and the indicator-based signal families
//! - Resampling, strength smoothing and polars export

pub mod annotate;
pub mod config;
pub mod data;
pub mod domain;
pub mod extrema;
pub mod frame;
pub mod indicators;
pub mod signals;
pub mod transform;
