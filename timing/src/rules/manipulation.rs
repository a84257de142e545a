//! Rules that flag an implausible client-reported modification time.
//!
//! Both rules cross-check the untrusted client date against the trusted server
//! clock. They can flag a value that no honest clock would produce; they cannot
//! show that an unflagged value is honest.

use crate::traits::rule::TimingRule;
use crate::types::{SubmissionTimes, TimingPolicy, TimingStatus};

/// Flags a client modification time later than the server upload time.
///
/// A file cannot have been modified after the server already received it, so a
/// lead beyond `policy.future_skew_tolerance` means the client clock ran ahead.
pub struct FutureClockRule;

impl TimingRule for FutureClockRule {
    fn name(&self) -> &'static str {
        "future_clock"
    }

    fn evaluate(&self, times: &SubmissionTimes, policy: &TimingPolicy) -> Option<TimingStatus> {
        let lead = times.clock_lead()?;
        (lead > policy.future_skew_tolerance).then_some(TimingStatus::SuspectedManipulationFuture)
    }
}

/// Flags a late upload that still claims a pre-deadline modification, when it
/// arrived more than `policy.clockback_threshold` after the deadline.
///
/// A short gap between finishing and uploading is normal; an upload a day or
/// more late with a pre-deadline edit date suggests the clock was rolled back.
pub struct ClockBackRule;

impl TimingRule for ClockBackRule {
    fn name(&self) -> &'static str {
        "clock_back"
    }

    fn evaluate(&self, times: &SubmissionTimes, policy: &TimingPolicy) -> Option<TimingStatus> {
        let upload_delta = times.upload_delta()?;
        let modification_delta = times.modification_delta()?;

        let claims_pre_deadline_edit = modification_delta <= chrono::Duration::zero();
        (upload_delta > policy.clockback_threshold && claims_pre_deadline_edit)
            .then_some(TimingStatus::SuspectedManipulationClockback)
    }
}
