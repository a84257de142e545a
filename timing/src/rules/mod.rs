//! The built-in rules, in the order the default chain evaluates them.
//!
//! Manipulation rules come before lateness rules, and lateness rules before
//! on-time:
//! 1. [`manipulation::FutureClockRule`]
//! 2. [`manipulation::ClockBackRule`]
//! 3. [`lateness::ModifiedAfterDeadlineRule`]
//! 4. [`lateness::LateRule`]
//! 5. [`lateness::OnTimeRule`]

pub mod lateness;
pub mod manipulation;

use crate::traits::rule::TimingRule;

/// The default rule chain.
pub fn default_rules() -> Vec<Box<dyn TimingRule>> {
    vec![
        Box::new(manipulation::FutureClockRule),
        Box::new(manipulation::ClockBackRule),
        Box::new(lateness::ModifiedAfterDeadlineRule),
        Box::new(lateness::LateRule),
        Box::new(lateness::OnTimeRule),
    ]
}
