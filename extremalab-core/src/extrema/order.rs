//! Extremum order: recursion depth of the extrema reduction.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtremaError {
    #[error("extremum order must be >= 1, got {0}")]
    InvalidOrder(usize),
}

/// Order of an extremum: 1 = extrema of the raw series, k = extrema of the
/// order-(k-1) extrema values.
///
/// Always >= 1; zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Order(usize);

impl Order {
    pub const FIRST: Order = Order(1);

    /// Order used for optimal signals unless configured otherwise.
    pub const SIGNAL_DEFAULT: Order = Order(3);

    pub fn new(order: usize) -> Result<Self, ExtremaError> {
        if order == 0 {
            return Err(ExtremaError::InvalidOrder(order));
        }
        Ok(Self(order))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for Order {
    type Error = ExtremaError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Order> for usize {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
