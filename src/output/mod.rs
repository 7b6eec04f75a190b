//! Output formatting for test results.

pub mod json;
pub mod terminal;
