//! Student's t-distribution helpers with real-valued degrees of freedom.
//!
//! The Welch–Satterthwaite approximation produces non-integer degrees of
//! freedom, so every function here takes `df` as `f64`. The CDF and inverse
//! CDF come from `statrs`, which evaluates them through the regularized
//! incomplete beta function.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::config::Alternative;

/// Standard t-distribution (location 0, scale 1) for a given df.
///
/// Callers validate `df > 0` before reaching this point, so construction
/// cannot fail for any df produced by the Welch–Satterthwaite formula.
fn standard_t(df: f64) -> StudentsT {
    debug_assert!(df.is_finite() && df > 0.0);
    StudentsT::new(0.0, 1.0, df).expect("t-distribution requires positive df")
}

/// Two-sided p-value: `2 * (1 - CDF_t(|t|, df))`, clamped to [0, 1].
pub fn two_sided_p_value(t: f64, df: f64) -> f64 {
    let dist = standard_t(df);
    (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0)
}

/// One-sided p-value for the given directional alternative.
///
/// `Less` tests mean_a < mean_b (lower tail of t); `Greater` tests
/// mean_a > mean_b (upper tail). `TwoSided` delegates to
/// [`two_sided_p_value`].
pub fn p_value(t: f64, df: f64, alternative: Alternative) -> f64 {
    match alternative {
        Alternative::TwoSided => two_sided_p_value(t, df),
        Alternative::Less => standard_t(df).cdf(t).clamp(0.0, 1.0),
        Alternative::Greater => (1.0 - standard_t(df).cdf(t)).clamp(0.0, 1.0),
    }
}

/// Two-sided critical value for a confidence level in (0, 1).
///
/// For a 95% level this is the 97.5th percentile of the t-distribution,
/// i.e. `inverse_cdf(0.5 + level / 2)`.
pub fn critical_value(df: f64, confidence_level: f64) -> f64 {
    debug_assert!(confidence_level > 0.0 && confidence_level < 1.0);
    standard_t(df).inverse_cdf(0.5 + confidence_level / 2.0)
}
