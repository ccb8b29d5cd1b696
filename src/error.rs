//! Error type shared by every fortnight command.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FortnightError>;

#[derive(Debug, Error)]
pub enum FortnightError {
    /// An internal check failed; the offending value is attached.
    #[error("invariant violated: {what} ({value})")]
    InvariantViolation { what: &'static str, value: i64 },

    #[error("stamps must pair up as in..out, found {0}")]
    OddStampCount(usize),

    #[error("invalid stamp: {0}")]
    InvalidStamp(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("empty year range: {first}..{last}")]
    EmptyYearRange { first: i32, last: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
