//! Error types for sample construction and test evaluation.

/// Error type for invalid inputs and numeric degeneracies.
///
/// All failures are reported synchronously to the caller; the computation is
/// deterministic, so no variant is retryable. No partial results are
/// produced on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A sample was constructed from an empty sequence.
    EmptySample,
    /// An observation was NaN or infinite.
    NonFiniteValue {
        /// Index of the offending observation in the input sequence.
        index: usize,
    },
    /// A sample is too small for variance estimation (needs at least 2).
    TooFewObservations {
        /// Number of observations actually present.
        len: usize,
    },
    /// Both samples have zero variance, so the test statistic is undefined.
    ZeroVariance,
    /// Confidence level outside the open interval (0, 1).
    InvalidConfidenceLevel(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptySample => write!(f, "sample contains no observations"),
            Error::NonFiniteValue { index } => {
                write!(f, "observation at index {} is NaN or infinite", index)
            }
            Error::TooFewObservations { len } => {
                write!(
                    f,
                    "sample has {} observation(s); at least 2 are required for variance",
                    len
                )
            }
            Error::ZeroVariance => {
                write!(f, "both samples have zero variance; t-statistic is undefined")
            }
            Error::InvalidConfidenceLevel(level) => {
                write!(
                    f,
                    "confidence level {} is outside the open interval (0, 1)",
                    level
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert!(Error::EmptySample.to_string().contains("no observations"));
        assert!(Error::NonFiniteValue { index: 3 }.to_string().contains("index 3"));
        assert!(Error::TooFewObservations { len: 1 }.to_string().contains("at least 2"));
        assert!(Error::ZeroVariance.to_string().contains("zero variance"));
        assert!(Error::InvalidConfidenceLevel(1.5).to_string().contains("1.5"));
    }
}
