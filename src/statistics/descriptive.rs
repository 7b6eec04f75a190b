//! Descriptive statistics over raw observation slices.
//!
//! These are the numeric primitives underlying the test: arithmetic mean and
//! sample variance with the n−1 (Bessel-corrected) denominator.

/// Compute the arithmetic mean of a slice.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute mean of empty slice");

    let mut sum = 0.0;
    for &v in data {
        sum += v;
    }
    sum / (data.len() as f64)
}

/// Compute the sample variance (n−1 denominator) given a precomputed mean.
///
/// # Panics
///
/// Panics if `data` has fewer than 2 observations.
pub fn sample_variance(data: &[f64], mean: f64) -> f64 {
    assert!(
        data.len() >= 2,
        "Sample variance requires at least 2 observations"
    );

    let mut ss = 0.0;
    for &v in data {
        let d = v - mean;
        ss += d * d;
    }
    ss / ((data.len() - 1) as f64)
}
