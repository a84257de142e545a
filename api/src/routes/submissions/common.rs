//! Request and response types for the submission timing endpoints.
//!
//! It includes:
//! - `BatchTimingRequest` → body of the batch analysis endpoint
//! - `BatchTimingItem` → one submission in a batch, with an optional caller id
//! - `BatchTimingResult` → one analyzed submission
//! - `BatchTimingResponse` → all results plus per-status counts
//! - `TimingPolicyResponse` → thresholds currently in force

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use timing::{RawSubmissionTimes, TimingPolicy, TimingReport, TimingStatus, duration::format_duration};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct BatchTimingRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "submissions must contain between 1 and 500 entries"
    ))]
    pub submissions: Vec<BatchTimingItem>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchTimingItem {
    /// Opaque identifier echoed back so the caller can match results.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub times: RawSubmissionTimes,
}

#[derive(Debug, Serialize)]
pub struct BatchTimingResult {
    pub id: Option<Value>,
    pub report: TimingReport,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchTimingResponse {
    pub results: Vec<BatchTimingResult>,
    pub total: usize,
    /// Number of results per status label; every label is present.
    pub counts: BTreeMap<&'static str, usize>,
}

impl BatchTimingResponse {
    pub fn new(results: Vec<BatchTimingResult>) -> Self {
        let mut counts: BTreeMap<&'static str, usize> =
            TimingStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
        for result in &results {
            *counts.entry(result.report.status.as_str()).or_default() += 1;
        }
        Self {
            total: results.len(),
            results,
            counts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimingPolicyResponse {
    pub clockback_threshold_seconds: i64,
    pub clockback_threshold: String,
    pub future_skew_tolerance_seconds: i64,
    pub future_skew_tolerance: String,
}

impl From<&TimingPolicy> for TimingPolicyResponse {
    fn from(policy: &TimingPolicy) -> Self {
        Self {
            clockback_threshold_seconds: policy.clockback_threshold.num_seconds(),
            clockback_threshold: format_duration(policy.clockback_threshold),
            future_skew_tolerance_seconds: policy.future_skew_tolerance.num_seconds(),
            future_skew_tolerance: format_duration(policy.future_skew_tolerance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> BatchTimingItem {
        BatchTimingItem {
            id: None,
            times: RawSubmissionTimes::default(),
        }
    }

    #[test]
    fn batch_size_bounds_are_enforced() {
        let empty = BatchTimingRequest { submissions: vec![] };
        assert!(empty.validate().is_err());

        let one = BatchTimingRequest { submissions: vec![item()] };
        assert!(one.validate().is_ok());

        let full = BatchTimingRequest {
            submissions: (0..500).map(|_| item()).collect(),
        };
        assert!(full.validate().is_ok());

        let over = BatchTimingRequest {
            submissions: (0..501).map(|_| item()).collect(),
        };
        let errors = over.validate().unwrap_err();
        assert_eq!(
            crate::routes::common::format_validation_errors(&errors),
            "submissions must contain between 1 and 500 entries"
        );
    }

    #[test]
    fn counts_cover_every_status() {
        let response = BatchTimingResponse::new(vec![]);
        assert_eq!(response.total, 0);
        assert_eq!(response.counts.len(), TimingStatus::ALL.len());
        assert!(response.counts.values().all(|&n| n == 0));
    }
}
