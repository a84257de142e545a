//! Rules that compare the upload time with the deadline.
//!
//! The deadline boundary is inclusive: an upload at exactly the deadline is on time.

use crate::traits::rule::TimingRule;
use crate::types::{SubmissionTimes, TimingPolicy, TimingStatus};
use chrono::Duration;

/// Late upload of a file the client says was modified after the deadline.
pub struct ModifiedAfterDeadlineRule;

impl TimingRule for ModifiedAfterDeadlineRule {
    fn name(&self) -> &'static str {
        "modified_after_deadline"
    }

    fn evaluate(&self, times: &SubmissionTimes, _policy: &TimingPolicy) -> Option<TimingStatus> {
        let late = times.upload_delta()? > Duration::zero();
        let modified_late = times.modification_delta()? > Duration::zero();
        (late && modified_late).then_some(TimingStatus::LateAndModifiedAfterDeadline)
    }
}

/// Late upload. Runs after [`ModifiedAfterDeadlineRule`], so it covers both a
/// pre-deadline modification date and a missing one.
pub struct LateRule;

impl TimingRule for LateRule {
    fn name(&self) -> &'static str {
        "late"
    }

    fn evaluate(&self, times: &SubmissionTimes, _policy: &TimingPolicy) -> Option<TimingStatus> {
        (times.upload_delta()? > Duration::zero()).then_some(TimingStatus::Late)
    }
}

pub struct OnTimeRule;

impl TimingRule for OnTimeRule {
    fn name(&self) -> &'static str {
        "on_time"
    }

    fn evaluate(&self, times: &SubmissionTimes, _policy: &TimingPolicy) -> Option<TimingStatus> {
        (times.upload_delta()? <= Duration::zero()).then_some(TimingStatus::OnTime)
    }
}
