//! Configuration for the Welch test.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configuration options for [`WelchTTest`](crate::WelchTTest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Confidence level for the difference-of-means interval (default: 0.95).
    ///
    /// Must lie strictly inside (0, 1). The reported interval is always the
    /// two-sided interval at this level.
    pub confidence_level: f64,

    /// Alternative hypothesis (default: two-sided).
    pub alternative: Alternative,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            alternative: Alternative::TwoSided,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfidenceLevel`] if the confidence level is
    /// NaN or outside the open interval (0, 1).
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}

/// Alternative hypothesis specification.
///
/// Matches SciPy semantics: `Less` tests whether the first group's mean is
/// smaller, `Greater` whether it is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alternative {
    /// Means differ in either direction.
    TwoSided,
    /// Mean of the first sample is less than the mean of the second.
    Less,
    /// Mean of the first sample is greater than the mean of the second.
    Greater,
}

impl Alternative {
    /// Parse an alternative from its conventional string form.
    ///
    /// Accepts `"two-sided"` / `"two_sided"`, `"less"`, and `"greater"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "two-sided" | "two_sided" => Some(Self::TwoSided),
            "less" => Some(Self::Less),
            "greater" => Some(Self::Greater),
            _ => None,
        }
    }
}

impl Default for Alternative {
    fn default() -> Self {
        Self::TwoSided
    }
}
