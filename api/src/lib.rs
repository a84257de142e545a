//! HTTP surface for submission-timing analysis.
//!
//! [`app`] assembles the full router (routes, request logging and CORS) and is
//! shared by the binary and the integration tests.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;

use crate::{middleware::log_request, routes::routes, state::AppState};

/// Builds the application router with all layers applied.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive();

    Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(cors)
}
