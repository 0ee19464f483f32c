//! Crossing detection between two aligned series.
//!
//! `crossed_above(a, b)` fires on the first step `a > b` after `a` has been
//! strictly below `b`. Once armed, the state only disarms on NaN, so a later
//! dip to equality followed by a rise fires again. `crossed_below` is the
//! mirror image.

/// Steps where `a` crosses above `b`.
pub fn crossed_above(a: &[f64], b: &[f64]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len());
    let mut out = vec![false; a.len()];
    let mut was_below = false;
    let mut above = false;

    for (i, (&x, &y)) in a.iter().zip(b).enumerate() {
        if !was_below {
            if x < y {
                was_below = true;
            }
            continue;
        }

        if x > y {
            out[i] = !above;
            above = true;
        } else if x.is_nan() || y.is_nan() {
            above = false;
            was_below = false;
        } else {
            above = false;
        }
    }

    out
}

/// Steps where `a` crosses below `b`.
pub fn crossed_below(a: &[f64], b: &[f64]) -> Vec<bool> {
    crossed_above(b, a)
}

/// Steps where `a` crosses above the constant `level`.
pub fn crossed_above_level(a: &[f64], level: f64) -> Vec<bool> {
    crossed_above(a, &vec![level; a.len()])
}

/// Steps where `a` crosses below the constant `level`.
pub fn crossed_below_level(a: &[f64], level: f64) -> Vec<bool> {
    crossed_below(a, &vec![level; a.len()])
}

/// Element-wise logical and.
pub(crate) fn and(a: &[bool], b: &[bool]) -> Vec<bool> {
    a.iter().zip(b).map(|(x, y)| *x && *y).collect()
}
