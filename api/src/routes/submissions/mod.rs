use axum::{
    Router,
    routing::{get, post},
};
use get::get_policy;
use post::{analyze_batch, analyze_submission};

use crate::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Defines HTTP routes for submission timing analysis.
///
/// # Routes
///
/// - `POST /`
///   Classify a single submission's timestamps.
///
/// - `POST /batch`
///   Classify up to 500 submissions in one request.
///
/// - `GET /policy`
///   Thresholds currently in force.
pub fn timing_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(analyze_submission))
        .route("/batch", post(analyze_batch))
        .route("/policy", get(get_policy))
}
