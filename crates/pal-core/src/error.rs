//! Error types for the palindrome checker
//!
//! Checking has exactly one failure mode: invoking a check with no text.
//! Normalization and comparison are total over every string input, so no
//! other error kind exists. All fallible operations return
//! `Result<T, Error>`.

use thiserror::Error;

/// Errors raised by check operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A check was invoked with empty input; no state was touched
    #[error("empty input: enter some text to check")]
    EmptyInput,
}

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, Error>;
