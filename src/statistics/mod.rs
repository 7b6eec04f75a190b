//! Statistical primitives for the Welch test.
//!
//! This module provides:
//! - Descriptive statistics (mean, Bessel-corrected sample variance)
//! - Student's t-distribution tail probabilities and critical values
//!   with real-valued degrees of freedom

mod descriptive;
mod student_t;

pub use descriptive::{mean, sample_variance};
pub use student_t::{critical_value, p_value, two_sided_p_value};
