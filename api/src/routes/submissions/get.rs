use axum::{Json, extract::State, response::IntoResponse};

use super::common::TimingPolicyResponse;
use crate::{response::ApiResponse, state::AppState};

/// GET /api/submissions/timing/policy
///
/// Returns the manipulation thresholds the classifier is running with, so the
/// review page can explain its flags.
///
/// ### Response
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "clockback_threshold_seconds": 86400,
///     "clockback_threshold": "1d 0h 0m",
///     "future_skew_tolerance_seconds": 0,
///     "future_skew_tolerance": "0m"
///   },
///   "message": "Timing policy retrieved"
/// }
/// ```
pub async fn get_policy(State(app_state): State<AppState>) -> impl IntoResponse {
    let policy = TimingPolicyResponse::from(app_state.classifier().policy());
    Json(ApiResponse::success(policy, "Timing policy retrieved"))
}
