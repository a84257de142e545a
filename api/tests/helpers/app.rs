use api::{app, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, header::CONTENT_TYPE},
    response::Response,
};
use serde_json::Value;
use timing::TimingPolicy;

pub fn make_test_app() -> Router {
    make_test_app_with_policy(TimingPolicy::default())
}

pub fn make_test_app_with_policy(policy: TimingPolicy) -> Router {
    app(AppState::new(policy))
}

/// Build a JSON POST request
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
