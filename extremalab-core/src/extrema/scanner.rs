//! Degree scan: how far the peak and trough reductions go for one series.
//!
//! Peaks and troughs are scanned as independent tracks. Each track keeps
//! raising the order until [`in_peaks`]/[`in_troughs`] report the order is
//! unsupported; the scan ends once both tracks have stopped.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::multi_order::{in_peaks, in_troughs};
use super::order::Order;

/// Extremum positions per order, in original-series coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedExtremaTable {
    orders: BTreeMap<Order, Vec<usize>>,
}

impl OrderedExtremaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, order: Order, positions: Vec<usize>) {
        self.orders.insert(order, positions);
    }

    pub fn get(&self, order: Order) -> Option<&[usize]> {
        self.orders.get(&order).map(|v| v.as_slice())
    }

    /// Highest order stored, if any.
    pub fn max_order(&self) -> Option<Order> {
        self.orders.keys().next_back().copied()
    }

    /// Orders in ascending order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Order, &[usize])> + '_ {
        self.orders.iter().map(|(o, p)| (*o, p.as_slice()))
    }

    /// Number of orders stored.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Output of [`DegreeScanner::scan`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtremaScan {
    pub peaks: OrderedExtremaTable,
    pub troughs: OrderedExtremaTable,
    /// Loop iterations performed (one per attempted order).
    pub iterations: usize,
}

/// Default cap on attempted orders: `floor(log2(len)) + 1`, at least 2.
///
/// Natural termination always fires at or below this order, because every
/// pass keeps at most half of its input.
pub fn sanity_ceiling(len: usize) -> usize {
    ((usize::BITS - len.leading_zeros()) as usize).max(2)
}

#[derive(Debug, Clone, Default)]
pub struct DegreeScanner {
    max_order: Option<Order>,
}

impl DegreeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt no order above `max_order`, replacing the default ceiling.
    pub fn with_max_order(mut self, max_order: Order) -> Self {
        self.max_order = Some(max_order);
        self
    }

    pub fn ceiling_for(&self, len: usize) -> usize {
        self.max_order
            .map(Order::get)
            .unwrap_or_else(|| sanity_ceiling(len))
    }

    pub fn scan(&self, x: &[f64]) -> ExtremaScan {
        let ceiling = self.ceiling_for(x.len());
        let mut scan = ExtremaScan::default();
        let mut peaks_open = true;
        let mut troughs_open = true;
        let mut order = Order::FIRST;

        while peaks_open || troughs_open {
            if order.get() > ceiling {
                if self.max_order.is_some() {
                    debug!("degree scan capped at order {ceiling}");
                } else {
                    warn!(
                        "degree scan hit the sanity ceiling of {ceiling} orders on {} points",
                        x.len()
                    );
                }
                break;
            }
            scan.iterations += 1;

            if peaks_open {
                match in_peaks(x, order) {
                    Some(set) => scan.peaks.insert(order, set.positions),
                    None => {
                        peaks_open = false;
                        debug!("stopped at order {order} in peak finding");
                    }
                }
            }

            if troughs_open {
                match in_troughs(x, order) {
                    Some(set) => scan.troughs.insert(order, set.positions),
                    None => {
                        troughs_open = false;
                        debug!("stopped at order {order} in trough finding");
                    }
                }
            }

            order = order.next();
        }

        scan
    }
}
