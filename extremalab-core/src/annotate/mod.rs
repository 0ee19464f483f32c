//! Directional annotation of a series.
//!
//! Two independent labelings: extremum degree from a degree scan, and trade
//! direction from closed trade records.

pub mod degree;
pub mod segment;

pub use degree::{annotate_degrees, annotate_degrees_with, label_scan, DegreeLabels, DegreeRow};
pub use segment::{annotate_trade_direction, dense_trade_direction, DirectionLabels};
