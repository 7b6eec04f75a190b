//! Test result types and related structures.

use serde::{Deserialize, Serialize};

use crate::config::Alternative;

/// Complete result of a Welch two-sample t-test.
///
/// Immutable once computed; every field is derived from the two input
/// samples and the configured confidence level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// The t-statistic: `(mean_a - mean_b) / standard_error`.
    pub t_statistic: f64,

    /// Welch–Satterthwaite approximate degrees of freedom.
    ///
    /// Real-valued, never truncated to an integer. Always lies between
    /// `min(n_a, n_b) - 1` and `(n_a - 1) + (n_b - 1)`.
    pub degrees_of_freedom: f64,

    /// Probability, under the null hypothesis of equal means, of a statistic
    /// at least as extreme as the one observed. In [0, 1].
    pub p_value: f64,

    /// Point estimate of the difference in means (`mean_a - mean_b`).
    pub mean_difference: f64,

    /// Standard error of the mean difference: `sqrt(var_a/n_a + var_b/n_b)`.
    pub standard_error: f64,

    /// Confidence level the interval was computed at.
    pub confidence_level: f64,

    /// Two-sided confidence interval `(low, high)` for the difference in
    /// means. Always contains `mean_difference`.
    pub confidence_interval: (f64, f64),

    /// Alternative hypothesis the p-value refers to.
    pub alternative: Alternative,

    /// Summary of the first sample.
    pub group_a: GroupSummary,

    /// Summary of the second sample.
    pub group_b: GroupSummary,
}

/// Per-group descriptive summary carried alongside the test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance (n−1 denominator).
    pub variance: f64,
}

impl TTestResult {
    /// Whether the null hypothesis is rejected at significance level `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Width of the confidence interval.
    pub fn interval_width(&self) -> f64 {
        self.confidence_interval.1 - self.confidence_interval.0
    }
}
