//! TradeSegment: a closed trade reduced to the span it occupied and its outcome.

use serde::{Deserialize, Serialize};

/// One round-trip trade, addressed by bar position.
///
/// The segment covers the half-open range `[entry_index, exit_index)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeSegment {
    pub entry_index: usize,
    pub exit_index: usize,
    pub pnl: f64,
}

impl TradeSegment {
    pub fn new(entry_index: usize, exit_index: usize, pnl: f64) -> Self {
        Self {
            entry_index,
            exit_index,
            pnl,
        }
    }

    /// Sign of the trade outcome: +1 winner, -1 loser, 0 flat (or NaN).
    pub fn direction(&self) -> i8 {
        sign(self.pnl)
    }
}

/// Sign of `x` as -1, 0 or +1. NaN maps to 0.
pub fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_pnl_sign() {
        assert_eq!(TradeSegment::new(0, 3, 12.5).direction(), 1);
        assert_eq!(TradeSegment::new(0, 3, -0.1).direction(), -1);
        assert_eq!(TradeSegment::new(0, 3, 0.0).direction(), 0);
    }

    #[test]
    fn nan_pnl_is_flat() {
        let seg = TradeSegment::new(1, 2, f64::NAN);
        assert_eq!(seg.direction(), 0);
    }
}
