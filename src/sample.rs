//! Validated observation sequences.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::statistics;

/// An immutable, ordered sequence of finite observations.
///
/// Construction validates the data once; afterwards the invariants hold for
/// the lifetime of the value: the sample is non-empty and contains no NaN or
/// infinite values. Missing values must be excluded upstream — the
/// [`from_labeled`](Sample::from_labeled) constructor does this for labeled
/// record streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Create a sample from raw observations.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySample`] if `values` is empty
    /// - [`Error::NonFiniteValue`] if any observation is NaN or infinite
    pub fn new(values: Vec<f64>) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptySample);
        }
        for (index, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(Error::NonFiniteValue { index });
            }
        }
        Ok(Self { values })
    }

    /// Create a sample by selecting records that carry a matching label.
    ///
    /// Records with a missing value (`None`) are skipped, mirroring the
    /// upstream exclusion of non-responses in survey data. Records whose
    /// label does not match are ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySample`] if no record matches the label
    /// - [`Error::NonFiniteValue`] if a matching observation is NaN or
    ///   infinite (index refers to position among the matching records)
    ///
    /// # Example
    ///
    /// ```
    /// use welch_t::Sample;
    ///
    /// let records = vec![
    ///     (Some(52_000.0), "owner"),
    ///     (Some(38_500.0), "non-owner"),
    ///     (None, "owner"), // non-response, skipped
    ///     (Some(61_250.0), "owner"),
    /// ];
    /// let owners = Sample::from_labeled(records, &"owner").unwrap();
    /// assert_eq!(owners.len(), 2);
    /// ```
    pub fn from_labeled<L, I>(records: I, label: &L) -> Result<Self, Error>
    where
        L: PartialEq,
        I: IntoIterator<Item = (Option<f64>, L)>,
    {
        let values: Vec<f64> = records
            .into_iter()
            .filter(|(_, l)| l == label)
            .filter_map(|(v, _)| v)
            .collect();
        Self::new(values)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: an empty Sample cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The observations, in their original order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        statistics::mean(&self.values)
    }

    /// Sample variance with the n−1 denominator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewObservations`] if the sample has fewer than
    /// 2 observations.
    pub fn variance(&self) -> Result<f64, Error> {
        if self.values.len() < 2 {
            return Err(Error::TooFewObservations {
                len: self.values.len(),
            });
        }
        Ok(statistics::sample_variance(&self.values, self.mean()))
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}
