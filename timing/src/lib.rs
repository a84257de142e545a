//! # Timing Library
//!
//! Submission-timing integrity analysis for teacher review.
//!
//! A submission carries three timestamps: the modification time the uploading
//! client claims for the file, the server-observed upload time, and the course
//! deadline. This crate classifies that triple as on time, late, or suspected
//! clock manipulation, and renders the supporting durations for display.
//!
//! ## Key Concepts
//! - **SubmissionTimes**: the three parsed timestamps, any of which may be missing.
//! - **TimingRule**: one step of the fixed-precedence decision chain.
//! - **TimingClassifier**: runs the chain and builds a [`report::TimingReport`].
//!
//! ## Limitation
//! The client-reported date is attacker-controlled. Cross-checking it against
//! the trusted upload time can flag implausible values but cannot prove an
//! honest one. The analysis is a review heuristic, not a security control.
//!
//! ## Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use timing::{classifier::TimingClassifier, types::{SubmissionTimes, TimingPolicy, TimingStatus}};
//!
//! let times = SubmissionTimes::new(
//!     Some(Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap()),
//!     Some(Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap()),
//!     Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()),
//! );
//! let report = TimingClassifier::new(TimingPolicy::default()).analyze(&times);
//! assert_eq!(report.status, TimingStatus::Late);
//! assert_eq!(report.duration.as_deref(), Some("2h 30m"));
//! ```

pub mod classifier;
pub mod duration;
pub mod error;
pub mod report;
pub mod rules;
pub mod timestamp;
pub mod traits;
pub mod types;

pub use classifier::{TimingClassifier, analyze};
pub use report::TimingReport;
pub use timestamp::{RawSubmissionTimes, RawTimestamp};
pub use types::{Lateness, Manipulation, SubmissionTimes, TimingPolicy, TimingStatus};
