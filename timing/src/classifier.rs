//! The fixed-precedence submission timing classifier.

use crate::report::TimingReport;
use crate::rules::default_rules;
use crate::traits::rule::TimingRule;
use crate::types::{Lateness, Manipulation, SubmissionTimes, TimingPolicy, TimingStatus};
use chrono::Duration;

/// Runs an ordered chain of [`TimingRule`]s over one submission.
///
/// The classifier holds no mutable state; one instance can be shared across
/// requests.
pub struct TimingClassifier {
    policy: TimingPolicy,
    rules: Vec<Box<dyn TimingRule>>,
}

impl TimingClassifier {
    /// Creates a classifier with the default rule chain (see [`crate::rules`]).
    pub fn new(policy: TimingPolicy) -> Self {
        Self {
            policy,
            rules: default_rules(),
        }
    }

    /// Creates a classifier with the thresholds from the global configuration.
    pub fn from_config() -> Self {
        Self::new(TimingPolicy::from_config())
    }

    pub fn policy(&self) -> &TimingPolicy {
        &self.policy
    }

    /// Returns the status from the first rule that applies, or
    /// [`TimingStatus::Unavailable`] when none does.
    pub fn classify(&self, times: &SubmissionTimes) -> TimingStatus {
        for rule in &self.rules {
            if let Some(status) = rule.evaluate(times, &self.policy) {
                tracing::debug!(rule = rule.name(), %status, "Submission timing classified");
                return status;
            }
        }
        tracing::debug!("No timing rule applied; status unavailable");
        TimingStatus::Unavailable
    }

    /// Lateness from `uploaded_at` and `deadline` only; the client date is not consulted.
    pub fn lateness(times: &SubmissionTimes) -> Lateness {
        match times.upload_delta() {
            Some(delta) if delta > Duration::zero() => Lateness::Late,
            Some(_) => Lateness::OnTime,
            None => Lateness::Unavailable,
        }
    }

    /// Manipulation outcome implied by a status.
    ///
    /// Without a client date no manipulation check can run. When neither
    /// manipulation rule fired but one of them lacked an input, the outcome is
    /// unavailable rather than a clean bill.
    pub fn manipulation(times: &SubmissionTimes, status: TimingStatus) -> Manipulation {
        if times.client_reported_date.is_none() {
            return Manipulation::Unavailable;
        }
        match status {
            TimingStatus::SuspectedManipulationFuture => Manipulation::FutureClock,
            TimingStatus::SuspectedManipulationClockback => Manipulation::ClockBack,
            _ if times.uploaded_at.is_none() || times.deadline.is_none() => {
                Manipulation::Unavailable
            }
            _ => Manipulation::NotSuspected,
        }
    }

    /// Classifies the submission and builds the display report. Never fails.
    pub fn analyze(&self, times: &SubmissionTimes) -> TimingReport {
        let status = self.classify(times);
        if status.is_suspicious() {
            tracing::warn!(
                %status,
                client_reported_date = ?times.client_reported_date,
                uploaded_at = ?times.uploaded_at,
                deadline = ?times.deadline,
                "Suspected submission time manipulation"
            );
        }
        TimingReport::build(times, status)
    }
}

impl Default for TimingClassifier {
    fn default() -> Self {
        Self::new(TimingPolicy::default())
    }
}

/// One-shot convenience over [`TimingClassifier::analyze`].
pub fn analyze(times: &SubmissionTimes, policy: &TimingPolicy) -> TimingReport {
    TimingClassifier::new(*policy).analyze(times)
}
