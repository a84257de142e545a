use crate::types::{SubmissionTimes, TimingPolicy, TimingStatus};

/// TimingRule is a strategy trait for one step of the classification chain.
///
/// The classifier evaluates its rules in order and the first rule returning a
/// verdict decides the status. A rule whose inputs are missing must return
/// `None` and let the chain continue.
pub trait TimingRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns the status this rule assigns, or `None` if it does not apply.
    fn evaluate(&self, times: &SubmissionTimes, policy: &TimingPolicy) -> Option<TimingStatus>;
}
