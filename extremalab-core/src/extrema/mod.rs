//! Multi-order extrema detection.
//!
//! - [`finder`]: first-order peaks and troughs
//! - [`multi_order`]: order-k reduction with index composition
//! - [`scanner`]: maximal order per track

pub mod finder;
pub mod multi_order;
pub mod order;
pub mod scanner;

pub use finder::{find_peaks, find_troughs, ExtremumSet};
pub use multi_order::{compose, in_peaks, in_troughs};
pub use order::{ExtremaError, Order};
pub use scanner::{sanity_ceiling, DegreeScanner, ExtremaScan, OrderedExtremaTable};
