//! Welch's two-sample t-test.
//!
//! The test compares the means of two independent samples without assuming
//! equal population variances. Its degrees of freedom come from the
//! Welch–Satterthwaite approximation and are real-valued, so the p-value and
//! critical value are evaluated on a t-distribution with non-integer df.

use crate::config::{Alternative, Config};
use crate::error::Error;
use crate::result::{GroupSummary, TTestResult};
use crate::sample::Sample;
use crate::statistics;

/// Configured Welch t-test.
///
/// Stateless and pure: [`compute`](WelchTTest::compute) has no side effects
/// and the same inputs always produce the same result.
///
/// # Example
///
/// ```
/// use welch_t::{Sample, WelchTTest};
///
/// let a = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let b = Sample::new(vec![6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
///
/// let result = WelchTTest::new()
///     .confidence_level(0.95)
///     .compute(&a, &b)
///     .unwrap();
///
/// assert!((result.t_statistic + 5.0).abs() < 1e-12);
/// assert!((result.degrees_of_freedom - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelchTTest {
    config: Config,
}

impl WelchTTest {
    /// Create a test with the default configuration (95% two-sided).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a test from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the confidence level for the difference-of-means interval.
    ///
    /// Must lie strictly inside (0, 1); validated in `compute`.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config.confidence_level = level;
        self
    }

    /// Set the alternative hypothesis (default: two-sided).
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.config.alternative = alternative;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the test on two samples.
    ///
    /// The confidence interval is always the two-sided interval at the
    /// configured level, even when a directional alternative is selected;
    /// only the p-value changes with the alternative.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfidenceLevel`] if the level is outside (0, 1)
    /// - [`Error::TooFewObservations`] if either sample has fewer than 2
    ///   observations
    /// - [`Error::ZeroVariance`] if both sample variances are zero (the
    ///   statistic is then a division by zero)
    pub fn compute(&self, a: &Sample, b: &Sample) -> Result<TTestResult, Error> {
        self.config.validate()?;

        let var_a = a.variance()?;
        let var_b = b.variance()?;
        if var_a == 0.0 && var_b == 0.0 {
            return Err(Error::ZeroVariance);
        }

        let (n_a, n_b) = (a.len() as f64, b.len() as f64);
        let (mean_a, mean_b) = (a.mean(), b.mean());

        // Per-group squared standard errors of the mean
        let sem2_a = var_a / n_a;
        let sem2_b = var_b / n_b;

        let standard_error = (sem2_a + sem2_b).sqrt();
        let mean_difference = mean_a - mean_b;
        let t_statistic = mean_difference / standard_error;

        let degrees_of_freedom = welch_satterthwaite_df(sem2_a, n_a, sem2_b, n_b);

        let p_value =
            statistics::p_value(t_statistic, degrees_of_freedom, self.config.alternative);

        let critical =
            statistics::critical_value(degrees_of_freedom, self.config.confidence_level);
        let margin = critical * standard_error;

        Ok(TTestResult {
            t_statistic,
            degrees_of_freedom,
            p_value,
            mean_difference,
            standard_error,
            confidence_level: self.config.confidence_level,
            confidence_interval: (mean_difference - margin, mean_difference + margin),
            alternative: self.config.alternative,
            group_a: GroupSummary {
                n: a.len(),
                mean: mean_a,
                variance: var_a,
            },
            group_b: GroupSummary {
                n: b.len(),
                mean: mean_b,
                variance: var_b,
            },
        })
    }
}

/// Welch–Satterthwaite approximate degrees of freedom.
///
/// `sem2_i = var_i / n_i`. At least one `sem2` is non-zero by the time this
/// is called, so the denominator is positive.
fn welch_satterthwaite_df(sem2_a: f64, n_a: f64, sem2_b: f64, n_b: f64) -> f64 {
    let total = sem2_a + sem2_b;
    total * total / (sem2_a * sem2_a / (n_a - 1.0) + sem2_b * sem2_b / (n_b - 1.0))
}
