//! # welch-t
//!
//! Welch's two-sample t-test for a difference in means.
//!
//! Given two numeric samples, this crate computes:
//! - The t-statistic
//! - Welch–Satterthwaite approximate degrees of freedom (real-valued)
//! - The p-value (two-sided by default, directional alternatives supported)
//! - A confidence interval for the difference of means
//!
//! Unlike the classic pooled-variance t-test, Welch's test does not assume
//! the two populations share a variance, which makes it the safer default
//! for observational data such as survey columns split by a categorical
//! label.
//!
//! ## Quick Start
//!
//! ```
//! use welch_t::{welch_t, Sample};
//!
//! let owners = Sample::new(vec![52.0, 61.0, 48.5, 70.2, 55.3]).unwrap();
//! let non_owners = Sample::new(vec![38.5, 45.0, 41.2, 39.9, 47.1, 36.4]).unwrap();
//!
//! let result = welch_t(&owners, &non_owners).unwrap();
//! println!("t = {:.3}, p = {:.4}", result.t_statistic, result.p_value);
//! println!(
//!     "95% CI for the mean difference: {:.1} to {:.1}",
//!     result.confidence_interval.0, result.confidence_interval.1
//! );
//! ```
//!
//! ## Configured tests
//!
//! Use the [`WelchTTest`] builder for a non-default confidence level or a
//! directional alternative:
//!
//! ```
//! use welch_t::{Alternative, Sample, WelchTTest};
//!
//! let a = Sample::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Sample::new(vec![2.5, 3.5, 4.5, 5.5]).unwrap();
//!
//! let result = WelchTTest::new()
//!     .confidence_level(0.99)
//!     .alternative(Alternative::Less)
//!     .compute(&a, &b)
//!     .unwrap();
//! # let _ = result;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod result;
mod sample;
mod welch;

// Functional modules
pub mod batch;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::{Alternative, Config};
pub use error::Error;
pub use result::{GroupSummary, TTestResult};
pub use sample::Sample;
pub use welch::WelchTTest;

/// Convenience function for a two-sided Welch test at the 95% level.
///
/// Equivalent to `WelchTTest::new().compute(a, b)`.
///
/// # Errors
///
/// Returns [`Error::TooFewObservations`] if either sample has fewer than 2
/// observations, or [`Error::ZeroVariance`] if both samples are constant.
pub fn welch_t(a: &Sample, b: &Sample) -> Result<TTestResult, Error> {
    WelchTTest::new().compute(a, b)
}
