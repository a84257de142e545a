use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use timing::{RawSubmissionTimes, TimingReport};
use validator::Validate;

use super::common::{BatchTimingRequest, BatchTimingResponse, BatchTimingResult};
use crate::{response::ApiResponse, routes::common::format_validation_errors, state::AppState};

/// POST /api/submissions/timing
///
/// Classify one submission's timing for teacher review.
///
/// ### Request Body
/// Any subset of the three timestamps. Each may be an RFC 3339 string, a naive
/// ISO date-time (read as UTC) or epoch milliseconds. camelCase names are accepted.
/// ```json
/// {
///   "clientReportedDate": "2024-01-14T09:00:00Z",
///   "uploadedAt": "2024-01-15T12:30:00Z",
///   "deadline": "2024-01-15T10:00:00Z"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` for any JSON object, including ones with missing or unparseable
///   fields (those degrade to `unavailable` and `N/A`):
/// ```json
/// {
///   "success": true,
///   "data": {
///     "status": "late",
///     "lateness": "late",
///     "manipulation": "none",
///     "is_late_submission": true,
///     "is_modified_after_deadline": false,
///     "suspected_time_manipulation": false,
///     "is_modified_before_but_submitted_late": true,
///     "duration": "2h 30m",
///     "late_by": "2h 30m",
///     "uploaded_at": "2024-01-15 12:30:00 UTC",
///     ...
///   },
///   "message": "Submission timing analyzed"
/// }
/// ```
///
/// - `400 Bad Request` / `415` / `422` when the body is not a JSON object
///   (status taken from the extractor rejection).
pub async fn analyze_submission(
    State(app_state): State<AppState>,
    payload: Result<Json<RawSubmissionTimes>, JsonRejection>,
) -> Response {
    let Json(raw) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected timing request body");
            return (
                rejection.status(),
                Json(ApiResponse::<Option<TimingReport>>::error(rejection.body_text())),
            )
                .into_response();
        }
    };

    let report = app_state.classifier().analyze(&raw.resolve());

    (
        StatusCode::OK,
        Json(ApiResponse::success(Some(report), "Submission timing analyzed")),
    )
        .into_response()
}

/// POST /api/submissions/timing/batch
///
/// Classify many submissions at once, e.g. for the teacher's submission list.
///
/// ### Request Body
/// ```json
/// {
///   "submissions": [
///     { "id": 17, "clientReportedDate": 1705222800000, "uploadedAt": "2024-01-15T12:30:00Z", "deadline": "2024-01-15T10:00:00Z" },
///     { "id": "abc", "uploadedAt": "2024-01-15T09:00:00Z", "deadline": "2024-01-15T10:00:00Z" }
///   ]
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK` with results in request order and a count for every status label:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "results": [ { "id": 17, "report": { "status": "late", ... } }, ... ],
///     "total": 2,
///     "counts": { "late": 1, "on_time": 1, "unavailable": 0, ... }
///   },
///   "message": "Analyzed 2 submissions"
/// }
/// ```
///
/// - `400 Bad Request` when `submissions` is empty or holds more than 500 entries:
/// ```json
/// {
///   "success": false,
///   "data": { "results": [], "total": 0, "counts": {} },
///   "message": "submissions must contain between 1 and 500 entries"
/// }
/// ```
pub async fn analyze_batch(
    State(app_state): State<AppState>,
    payload: Result<Json<BatchTimingRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected batch timing request body");
            return (
                rejection.status(),
                Json(ApiResponse::<BatchTimingResponse>::error(rejection.body_text())),
            )
                .into_response();
        }
    };

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<BatchTimingResponse>::error(error_message)),
        )
            .into_response();
    }

    let classifier = app_state.classifier();
    let results = req
        .submissions
        .into_iter()
        .map(|item| BatchTimingResult {
            report: classifier.analyze(&item.times.resolve()),
            id: item.id,
        })
        .collect::<Vec<_>>();

    let response = BatchTimingResponse::new(results);
    let message = format!("Analyzed {} submissions", response.total);

    (StatusCode::OK, Json(ApiResponse::success(response, message))).into_response()
}
