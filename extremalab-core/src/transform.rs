//! Post-processing of label and flag columns.

/// Position of each `true` within its run of consecutive `true`s, counted
/// from 1. `false` entries map to 0.
///
/// `[F, T, T, F, T]` → `[0, 1, 2, 0, 1]`
pub fn consecutive_true(flags: &[bool]) -> Vec<usize> {
    let mut run = 0usize;
    flags
        .iter()
        .map(|&flag| {
            run = if flag { run + 1 } else { 0 };
            run
        })
        .collect()
}

/// Smooth a peak/trough column into a continuous strength score.
///
/// Gaussian filter with standard deviation `sigma`, truncated at four
/// standard deviations. Samples beyond either end are mirrored about the
/// edge, edge sample included (`d c b a | a b c d | d c b a`).
pub fn pt_to_strength(pt: &[i32], sigma: f64) -> Vec<f64> {
    let values: Vec<f64> = pt.iter().map(|&v| v as f64).collect();
    gaussian_filter(&values, sigma)
}

/// 1-D Gaussian filter with mirrored boundaries.
pub fn gaussian_filter(values: &[f64], sigma: f64) -> Vec<f64> {
    assert!(sigma > 0.0, "Gaussian sigma must be > 0");
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;
    let period = 2 * n as isize;

    (0..n as isize)
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(k, w)| {
                    let m = (i + k as isize - radius).rem_euclid(period);
                    let j = if m < n as isize { m } else { period - 1 - m };
                    w * values[j as usize]
                })
                .sum()
        })
        .collect()
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as i64;
    let weights: Vec<f64> = (-radius..=radius)
        .map(|x| (-0.5 * (x as f64 / sigma).powi(2)).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}
