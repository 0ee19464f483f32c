//! Property tests for extrema invariants.
//!
//! Uses proptest to verify:
//! 1. Trough/peak duality: troughs of x are the peaks of -x
//! 2. Endpoints are never extrema
//! 3. Monotone input has no extrema
//! 4. Order 1 of the multi-order reduction is the plain finder
//! 5. Higher orders are strictly increasing subsets of lower orders
//! 6. Optimal signals alternate
//! 7. The finder is idempotent
//! 8. The degree scan terminates within the series length

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use extremalab_core::annotate::{annotate_degrees, dense_trade_direction};
use extremalab_core::domain::{TimeSeries, TradeSegment};
use extremalab_core::extrema::{find_peaks, find_troughs, in_peaks, in_troughs, DegreeScanner, Order};
use extremalab_core::signals::{optimal_signals, ConflictPolicy};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0..100.0_f64, 0..200)
}

/// Coarse integer levels, so plateaus and ties show up often.
fn arb_levels() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0..6_i32).prop_map(f64::from), 0..120)
}

/// Strictly increasing. A flat step inside a rise reads as a trough once
/// negated, so plateaus are excluded here.
fn arb_increasing() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01..5.0_f64, 0..100).prop_map(|steps| {
        steps
            .iter()
            .scan(0.0, |acc, s| {
                *acc += s;
                Some(*acc)
            })
            .collect()
    })
}

fn arb_policy() -> impl Strategy<Value = ConflictPolicy> {
    prop_oneof![
        Just(ConflictPolicy::PreferTrough),
        Just(ConflictPolicy::PreferPeak),
        Just(ConflictPolicy::Skip),
    ]
}

fn series(values: Vec<f64>) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    TimeSeries::regular(start, Duration::minutes(1), values)
}

fn is_strictly_increasing(p: &[usize]) -> bool {
    p.windows(2).all(|w| w[0] < w[1])
}

// ── 1–3. Finder ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn troughs_are_negated_peaks(x in arb_values()) {
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        let troughs = find_troughs(&x);
        let peaks = find_peaks(&neg);

        prop_assert_eq!(&troughs.positions, &peaks.positions);
        for (t, p) in troughs.values.iter().zip(&peaks.values) {
            prop_assert_eq!(*t, -*p);
        }
    }

    #[test]
    fn extrema_are_interior(x in arb_levels()) {
        for set in [find_peaks(&x), find_troughs(&x)] {
            prop_assert!(is_strictly_increasing(&set.positions));
            prop_assert_eq!(set.positions.len(), set.values.len());
            for &p in &set.positions {
                prop_assert!(p > 0 && p + 1 < x.len());
            }
        }
    }

    #[test]
    fn monotone_input_has_no_extrema(x in arb_increasing()) {
        prop_assert!(find_peaks(&x).is_empty());
        prop_assert!(find_troughs(&x).is_empty());
    }

    #[test]
    fn finder_is_idempotent(x in arb_values()) {
        prop_assert_eq!(find_peaks(&x), find_peaks(&x));
        prop_assert_eq!(find_troughs(&x), find_troughs(&x));
    }
}

// ── 4–5. Multi-order reduction ───────────────────────────────────────

proptest! {
    #[test]
    fn first_order_matches_finder(x in arb_values()) {
        prop_assert_eq!(in_peaks(&x, Order::FIRST), Some(find_peaks(&x)));
        prop_assert_eq!(in_troughs(&x, Order::FIRST), Some(find_troughs(&x)));
    }

    #[test]
    fn second_order_is_subset_of_first(x in arb_levels()) {
        let second = Order::new(2).unwrap();
        let first = find_peaks(&x).positions;
        if let Some(set) = in_peaks(&x, second) {
            prop_assert!(!set.is_empty());
            prop_assert!(is_strictly_increasing(&set.positions));
            prop_assert!(set.positions.iter().all(|p| first.contains(p)));
            for (p, v) in set.iter() {
                prop_assert_eq!(v, x[p]);
            }
        }

        let first = find_troughs(&x).positions;
        if let Some(set) = in_troughs(&x, second) {
            prop_assert!(is_strictly_increasing(&set.positions));
            prop_assert!(set.positions.iter().all(|p| first.contains(p)));
        }
    }
}

// ── Scanner and annotation ───────────────────────────────────────────

proptest! {
    #[test]
    fn scan_terminates_within_length(x in prop::collection::vec(-100.0..100.0_f64, 2..300)) {
        let scan = DegreeScanner::new().scan(&x);
        prop_assert!(scan.iterations <= x.len());

        for table in [&scan.peaks, &scan.troughs] {
            // Orders are contiguous from 1, each nested in the one below.
            let mut previous: Option<&[usize]> = None;
            for (k, (order, positions)) in table.iter().enumerate() {
                prop_assert_eq!(order.get(), k + 1);
                if let Some(prev) = previous {
                    prop_assert!(positions.iter().all(|p| prev.contains(p)));
                }
                previous = Some(positions);
            }
        }
    }

    #[test]
    fn degree_columns_agree(x in arb_levels()) {
        let labels = annotate_degrees(&series(x.clone()));
        prop_assert_eq!(labels.len(), x.len());
        for row in labels.rows() {
            if row.trough > 0 {
                prop_assert_eq!(row.pt, -(row.trough as i32));
            } else if row.peak > 0 {
                prop_assert_eq!(row.pt, row.peak as i32);
            } else {
                prop_assert_eq!(row.pt, 0);
            }
        }
    }

    #[test]
    fn trade_direction_is_dense(
        len in 0usize..60,
        cuts in prop::collection::vec(0usize..60, 0..12),
        pnls in prop::collection::vec(-5.0..5.0_f64, 6),
    ) {
        let mut cuts = cuts;
        cuts.sort_unstable();
        let records: Vec<TradeSegment> = cuts
            .chunks_exact(2)
            .zip(&pnls)
            .map(|(c, pnl)| TradeSegment::new(c[0], c[1], *pnl))
            .collect();

        let dense = dense_trade_direction(len, &records);
        prop_assert_eq!(dense.len(), len);
        prop_assert!(dense.iter().all(|d| (-1..=1).contains(d)));
        if records.is_empty() {
            prop_assert!(dense.iter().all(|d| *d == 0));
        }
    }
}

// ── 6. Optimal signals ───────────────────────────────────────────────

proptest! {
    #[test]
    fn optimal_signals_alternate(
        x in arb_levels(),
        order in 1usize..4,
        policy in arb_policy(),
    ) {
        let table = optimal_signals(&series(x), Order::new(order).unwrap(), policy);
        for pair in table.rows().windows(2) {
            prop_assert_ne!(pair[0].signal, pair[1].signal);
            prop_assert!(pair[0].position < pair[1].position);
        }
        for row in table.iter() {
            prop_assert!(row.signal == 1 || row.signal == -1);
            prop_assert_eq!(row.pos, row.signal);
        }
    }
}
