//! Timing Error Types
//!
//! [`TimingError`] describes why an untrusted timestamp could not be turned into
//! a UTC instant. The analysis path never propagates it: a failed parse becomes
//! a missing timestamp and the report degrades to `unavailable` / `N/A`. Callers
//! that want the reason (for logging or validation messages) can ask for it via
//! [`crate::timestamp::parse_timestamp_str`] or [`crate::timestamp::RawTimestamp::parse`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimingError {
    /// The value was an empty or whitespace-only string.
    #[error("timestamp is empty")]
    Empty,
    /// The string matched none of the accepted date-time layouts.
    #[error("unrecognized timestamp format: {0}")]
    UnrecognizedFormat(String),
    /// A numeric epoch value that does not map to a representable instant.
    #[error("timestamp out of range: {0}")]
    OutOfRange(String),
    /// JSON value of a type that can never be a timestamp (bool, array, object).
    #[error("unsupported timestamp value: {0}")]
    UnsupportedType(String),
}
