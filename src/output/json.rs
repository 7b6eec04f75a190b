//! JSON serialization for test results.

use crate::result::TTestResult;

/// Serialize a TTestResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// TTestResult).
pub fn to_json(result: &TTestResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a TTestResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// TTestResult).
pub fn to_json_pretty(result: &TTestResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
