//! Display report for one analyzed submission.
//!
//! A [`TimingReport`] is what the teacher review page renders: the status label,
//! the four derived flags, duration texts and the raw timestamps (or `N/A`).
//! Every field is a pure function of the three timestamps and the status.

use crate::classifier::TimingClassifier;
use crate::duration::format_duration;
use crate::timestamp::format_timestamp;
use crate::types::{Lateness, Manipulation, SubmissionTimes, TimingStatus};
use chrono::Duration;
use serde::Serialize;

/// Shown alongside every report.
pub const LIMITATION: &str = "The client-reported modification date is supplied by the \
    student's device and can be set arbitrarily. These checks only flag timestamps that are \
    implausible against the server clock; they cannot prove a timestamp is honest and are a \
    review heuristic, not a security control.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingReport {
    pub status: TimingStatus,
    pub lateness: Lateness,
    pub manipulation: Manipulation,

    pub is_late_submission: bool,
    pub is_modified_after_deadline: bool,
    pub suspected_time_manipulation: bool,
    pub is_modified_before_but_submitted_late: bool,

    /// The delta that explains `status`, if it has one.
    pub duration: Option<String>,
    pub late_by: Option<String>,
    pub modified_after_deadline_by: Option<String>,
    pub submitted_early_by: Option<String>,
    pub clock_ahead_by: Option<String>,

    pub client_reported_date: String,
    pub uploaded_at: String,
    pub deadline: String,

    pub summary: String,
    pub limitation: &'static str,
}

impl TimingReport {
    pub fn build(times: &SubmissionTimes, status: TimingStatus) -> Self {
        let lateness = TimingClassifier::lateness(times);
        let manipulation = TimingClassifier::manipulation(times, status);

        let upload_delta = times.upload_delta();
        let modification_delta = times.modification_delta();

        let is_late_submission = lateness == Lateness::Late;
        let is_modified_after_deadline = modification_delta.is_some_and(|d| d > Duration::zero());
        let is_modified_before_but_submitted_late =
            is_late_submission && modification_delta.is_some_and(|d| d <= Duration::zero());

        let late_by = upload_delta
            .filter(|_| is_late_submission)
            .map(format_duration);
        let submitted_early_by = upload_delta
            .filter(|_| lateness == Lateness::OnTime)
            .map(format_duration);
        let modified_after_deadline_by = modification_delta
            .filter(|_| is_modified_after_deadline)
            .map(format_duration);
        let clock_ahead_by = times
            .clock_lead()
            .filter(|_| manipulation == Manipulation::FutureClock)
            .map(format_duration);

        let duration = match status {
            TimingStatus::Late | TimingStatus::SuspectedManipulationClockback => late_by.clone(),
            TimingStatus::LateAndModifiedAfterDeadline => modified_after_deadline_by.clone(),
            TimingStatus::SuspectedManipulationFuture => clock_ahead_by.clone(),
            TimingStatus::OnTime | TimingStatus::Unavailable => None,
        };

        let summary = summarize(
            status,
            late_by.as_deref(),
            modified_after_deadline_by.as_deref(),
            submitted_early_by.as_deref(),
            clock_ahead_by.as_deref(),
            is_modified_before_but_submitted_late,
        );

        Self {
            status,
            lateness,
            manipulation,
            is_late_submission,
            is_modified_after_deadline,
            suspected_time_manipulation: matches!(
                manipulation,
                Manipulation::FutureClock | Manipulation::ClockBack
            ),
            is_modified_before_but_submitted_late,
            duration,
            late_by,
            modified_after_deadline_by,
            submitted_early_by,
            clock_ahead_by,
            client_reported_date: format_timestamp(times.client_reported_date),
            uploaded_at: format_timestamp(times.uploaded_at),
            deadline: format_timestamp(times.deadline),
            summary,
            limitation: LIMITATION,
        }
    }
}

fn summarize(
    status: TimingStatus,
    late_by: Option<&str>,
    modified_by: Option<&str>,
    early_by: Option<&str>,
    ahead_by: Option<&str>,
    modified_before: bool,
) -> String {
    let na = crate::timestamp::NOT_AVAILABLE;
    match status {
        TimingStatus::OnTime => format!(
            "Submitted on time, {} before the deadline.",
            early_by.unwrap_or(na)
        ),
        TimingStatus::Late if modified_before => format!(
            "Submitted {} after the deadline; the file was last modified before the deadline.",
            late_by.unwrap_or(na)
        ),
        TimingStatus::Late => format!("Submitted {} after the deadline.", late_by.unwrap_or(na)),
        TimingStatus::LateAndModifiedAfterDeadline => format!(
            "Submitted {} after the deadline; the file was modified {} after the deadline.",
            late_by.unwrap_or(na),
            modified_by.unwrap_or(na)
        ),
        TimingStatus::SuspectedManipulationFuture => format!(
            "The reported modification time is {} ahead of the server upload time; the client clock may have been set forward.",
            ahead_by.unwrap_or(na)
        ),
        TimingStatus::SuspectedManipulationClockback => format!(
            "Submitted {} after the deadline while reporting a modification before it; the client clock may have been rolled back.",
            late_by.unwrap_or(na)
        ),
        TimingStatus::Unavailable => "Timing information is unavailable.".to_string(),
    }
}
