//! Core types shared by the rules, the classifier and the report.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three timestamps the analysis runs over.
///
/// `None` means the value was missing upstream or could not be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionTimes {
    /// File modification time claimed by the uploading client. Untrusted.
    pub client_reported_date: Option<DateTime<Utc>>,
    /// Time the server received the file. Trusted.
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Course cutoff set by the teacher. Trusted.
    pub deadline: Option<DateTime<Utc>>,
}

impl SubmissionTimes {
    pub fn new(
        client_reported_date: Option<DateTime<Utc>>,
        uploaded_at: Option<DateTime<Utc>>,
        deadline: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            client_reported_date,
            uploaded_at,
            deadline,
        }
    }

    /// `uploaded_at - deadline`, when both are known.
    pub fn upload_delta(&self) -> Option<Duration> {
        Some(self.uploaded_at? - self.deadline?)
    }

    /// `client_reported_date - deadline`, when both are known.
    pub fn modification_delta(&self) -> Option<Duration> {
        Some(self.client_reported_date? - self.deadline?)
    }

    /// `client_reported_date - uploaded_at`, when both are known.
    pub fn clock_lead(&self) -> Option<Duration> {
        Some(self.client_reported_date? - self.uploaded_at?)
    }
}

/// Upper bound on configured thresholds (a century), so conversion into a
/// `Duration` cannot overflow.
const MAX_POLICY_HOURS: u64 = 24 * 365 * 100;

/// Thresholds for the manipulation heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingPolicy {
    /// An upload arriving more than this long after the deadline while claiming a
    /// pre-deadline modification is flagged as a rolled-back clock.
    pub clockback_threshold: Duration,
    /// How far the client modification time may run ahead of the upload time
    /// before it is flagged as a future clock. Zero means any lead is flagged.
    pub future_skew_tolerance: Duration,
}

impl TimingPolicy {
    pub fn new(clockback_threshold: Duration, future_skew_tolerance: Duration) -> Self {
        Self {
            clockback_threshold,
            future_skew_tolerance,
        }
    }

    /// Builds the policy from the global [`util::config::AppConfig`].
    pub fn from_config() -> Self {
        use util::config;
        Self::new(
            Duration::hours(config::clockback_threshold_hours().min(MAX_POLICY_HOURS) as i64),
            Duration::seconds(
                config::future_skew_tolerance_seconds().min(MAX_POLICY_HOURS * 3600) as i64,
            ),
        )
    }
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self::new(Duration::hours(24), Duration::zero())
    }
}

/// The single label shown to the reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingStatus {
    OnTime,
    Late,
    LateAndModifiedAfterDeadline,
    SuspectedManipulationFuture,
    SuspectedManipulationClockback,
    Unavailable,
}

impl TimingStatus {
    pub const ALL: [TimingStatus; 6] = [
        TimingStatus::OnTime,
        TimingStatus::Late,
        TimingStatus::LateAndModifiedAfterDeadline,
        TimingStatus::SuspectedManipulationFuture,
        TimingStatus::SuspectedManipulationClockback,
        TimingStatus::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimingStatus::OnTime => "on_time",
            TimingStatus::Late => "late",
            TimingStatus::LateAndModifiedAfterDeadline => "late_and_modified_after_deadline",
            TimingStatus::SuspectedManipulationFuture => "suspected_manipulation_future",
            TimingStatus::SuspectedManipulationClockback => "suspected_manipulation_clockback",
            TimingStatus::Unavailable => "unavailable",
        }
    }

    pub fn is_suspicious(&self) -> bool {
        matches!(
            self,
            TimingStatus::SuspectedManipulationFuture | TimingStatus::SuspectedManipulationClockback
        )
    }
}

impl fmt::Display for TimingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lateness resolved from `uploaded_at` and `deadline` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lateness {
    OnTime,
    Late,
    Unavailable,
}

/// Outcome of the manipulation checks, which all need the client date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Manipulation {
    #[serde(rename = "none")]
    NotSuspected,
    FutureClock,
    ClockBack,
    Unavailable,
}
