use axum::{
    extract::Request,
    http::{
        HeaderMap, Method,
        header::{HeaderName, ORIGIN, USER_AGENT},
    },
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

fn header_value(headers: &HeaderMap, name: HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned()
}

/// Logs one line per request after the handler has run.
///
/// Logged fields:
/// - `method`: HTTP method
/// - `path`: Requested URI path
/// - `status`: Response status code
/// - `elapsed_ms`: Handler time in milliseconds
/// - `origin`: Value of the `Origin` header if present
/// - `user_agent`: Value of the `User-Agent` header if present
pub async fn log_request(req: Request, next: Next) -> Response {
    // Skip logging for preflight requests
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let origin = header_value(req.headers(), ORIGIN);
    let user_agent = header_value(req.headers(), USER_AGENT);

    let started = Instant::now();
    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        origin = %origin,
        user_agent = %user_agent,
        "Incoming request"
    );

    response
}
