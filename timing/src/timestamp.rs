//! Parsing of untrusted timestamp input and display formatting.
//!
//! Accepted forms:
//! - RFC 3339 strings with an offset (`2024-01-15T10:00:00Z`, `2024-01-15T12:00:00+02:00`)
//! - naive ISO date-times, read as UTC (`2024-01-15T10:00:00`, `2024-01-15 10:00:00.250`)
//! - epoch milliseconds, as a JSON number or a string of digits (browser `File.lastModified`)
//!
//! Anything else is rejected with a [`TimingError`]; the report path turns that
//! into a missing value.

use crate::error::TimingError;
use crate::types::SubmissionTimes;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Placeholder rendered for any timestamp that is missing or unparseable.
pub const NOT_AVAILABLE: &str = "N/A";

/// A timestamp exactly as it arrived on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl RawTimestamp {
    pub fn parse(&self) -> Result<DateTime<Utc>, TimingError> {
        match self {
            RawTimestamp::Integer(ms) => from_millis(*ms),
            RawTimestamp::Float(ms) => {
                if !ms.is_finite() {
                    return Err(TimingError::OutOfRange(ms.to_string()));
                }
                // saturating cast, out-of-range values are rejected by from_millis
                from_millis(ms.trunc() as i64)
            }
            RawTimestamp::Text(s) => parse_timestamp_str(s),
            RawTimestamp::Other(v) => Err(TimingError::UnsupportedType(v.to_string())),
        }
    }
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        RawTimestamp::Text(value.to_string())
    }
}

impl From<i64> for RawTimestamp {
    fn from(value: i64) -> Self {
        RawTimestamp::Integer(value)
    }
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>, TimingError> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| TimingError::OutOfRange(ms.to_string()))
}

/// Parses one timestamp string in any of the accepted forms.
pub fn parse_timestamp_str(input: &str) -> Result<DateTime<Utc>, TimingError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(TimingError::Empty);
    }

    let digits = s.strip_prefix('-').unwrap_or(s);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let ms: i64 = s
            .parse()
            .map_err(|_| TimingError::OutOfRange(s.to_string()))?;
        return from_millis(ms);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimingError::UnrecognizedFormat(s.to_string()))
}

/// Lenient variant: `None` for anything that does not parse.
pub fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    raw.parse().ok()
}

/// Renders a timestamp for display, or [`NOT_AVAILABLE`].
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// The three submission timestamps as received from the upstream record.
///
/// Both snake_case and the camelCase names used by the review page are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSubmissionTimes {
    #[serde(default, alias = "clientReportedDate")]
    pub client_reported_date: Option<RawTimestamp>,
    #[serde(default, alias = "uploadedAt")]
    pub uploaded_at: Option<RawTimestamp>,
    #[serde(default)]
    pub deadline: Option<RawTimestamp>,
}

impl RawSubmissionTimes {
    /// Parses every present field, dropping the ones that fail.
    pub fn resolve(&self) -> SubmissionTimes {
        SubmissionTimes::new(
            resolve_field("client_reported_date", self.client_reported_date.as_ref()),
            resolve_field("uploaded_at", self.uploaded_at.as_ref()),
            resolve_field("deadline", self.deadline.as_ref()),
        )
    }
}

fn resolve_field(field: &'static str, raw: Option<&RawTimestamp>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match raw.parse() {
        Ok(ts) => Some(ts),
        Err(err) => {
            tracing::debug!(field, error = %err, "Discarding unparseable timestamp");
            None
        }
    }
}
