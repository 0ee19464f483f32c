//! Domain types: bars, time series, and trade segments.

pub mod bar;
pub mod series;
pub mod trade;

pub use bar::Bar;
pub use series::{SeriesError, TimeSeries};
pub use trade::{sign, TradeSegment};

#[cfg(test)]
pub use series::make_series;
