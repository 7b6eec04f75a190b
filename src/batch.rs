//! Batch evaluation over many sample pairs.
//!
//! Each invocation is independent and pure, so pairs can be evaluated in
//! parallel with no coordination. With the `parallel` feature enabled the
//! batch runs on the rayon thread pool; otherwise it falls back to a
//! sequential loop.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::result::TTestResult;
use crate::sample::Sample;
use crate::welch::WelchTTest;

/// Run the same configured test across many sample pairs.
///
/// Output order matches input order. Each element is the per-pair outcome,
/// so one degenerate pair does not abort the rest of the batch.
#[cfg(feature = "parallel")]
pub fn run_batch(
    test: &WelchTTest,
    pairs: &[(Sample, Sample)],
) -> Vec<Result<TTestResult, Error>> {
    pairs
        .par_iter()
        .map(|(a, b)| test.compute(a, b))
        .collect()
}

/// Run the same configured test across many sample pairs.
///
/// Output order matches input order. Each element is the per-pair outcome,
/// so one degenerate pair does not abort the rest of the batch.
#[cfg(not(feature = "parallel"))]
pub fn run_batch(
    test: &WelchTTest,
    pairs: &[(Sample, Sample)],
) -> Vec<Result<TTestResult, Error>> {
    pairs.iter().map(|(a, b)| test.compute(a, b)).collect()
}
