//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint
//! - `/submissions/timing` → Submission timing analysis for teacher review

use axum::Router;

use crate::routes::{health::health_routes, submissions::timing_routes};
use crate::state::AppState;

pub mod common;
pub mod health;
pub mod submissions;

/// Builds the router for all `/api` endpoints and binds the shared state.
///
/// # Route Structure:
/// - `/health` → Health check endpoint.
/// - `/submissions/timing` → Single and batch timing analysis, and the active policy.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/submissions/timing", timing_routes())
        .with_state(app_state)
}
