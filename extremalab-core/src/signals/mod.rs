//! Signals derived from price, volume and the extrema hierarchy.
//!
//! - `optimal`: hindsight buy/sell table at a chosen extremum order
//! - `cross`: threshold and series crossing detection
//! - `momentum`, `ratio`, `drawdown`, `oscillator`: boolean and numeric
//!   signal families built from the indicators in [`crate::indicators`]

pub mod cross;
pub mod drawdown;
pub mod momentum;
pub mod optimal;
pub mod oscillator;
pub mod ratio;

pub use cross::{crossed_above, crossed_above_level, crossed_below, crossed_below_level};
pub use drawdown::DrawdownSignals;
pub use momentum::MomentumSignals;
pub use optimal::{
    forward_fill, optimal_signals, optimal_signals_from_bars, raw_signal, ConflictPolicy,
    SignalRow, SignalTable,
};
pub use oscillator::OscillatorSignals;
pub use ratio::{DumpSignals, VolumeSignals};
