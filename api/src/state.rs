//! Application state container shared across Axum route handlers.
//!
//! Holds the timing classifier built once at startup from the configured
//! thresholds. The classifier is immutable, so handlers share it through an `Arc`.

use std::sync::Arc;
use timing::{TimingClassifier, TimingPolicy};

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<TimingClassifier>,
}

impl AppState {
    /// Creates a new `AppState` whose classifier uses `policy`.
    pub fn new(policy: TimingPolicy) -> Self {
        Self {
            classifier: Arc::new(TimingClassifier::new(policy)),
        }
    }

    /// Creates a new `AppState` from the global `AppConfig` thresholds.
    pub fn from_config() -> Self {
        Self {
            classifier: Arc::new(TimingClassifier::from_config()),
        }
    }

    /// Returns a shared reference to the classifier.
    pub fn classifier(&self) -> &TimingClassifier {
        &self.classifier
    }
}
