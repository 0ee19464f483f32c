//! ExtremaLab Runner: batch labeling orchestration.
//!
//! This crate builds on `extremalab-core` to provide:
//! - TOML run configuration with content-addressed run IDs
//! - Optional resampling ahead of labeling
//! - Per-symbol degree labels, optimal signals and strength, in parallel

pub mod batch;
pub mod config;

pub use batch::{label_symbol, label_universe, BatchResult, RunError, SymbolLabels};
pub use config::{ConfigError, ResampleConfig, RunConfig, RunId};
