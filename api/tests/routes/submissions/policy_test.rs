#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Duration;
    use timing::TimingPolicy;
    use tower::ServiceExt;

    use crate::helpers::{body_json, get, make_test_app, make_test_app_with_policy};

    const URI: &str = "/api/submissions/timing/policy";

    #[tokio::test]
    async fn default_policy_is_reported() {
        let app = make_test_app();
        let response = app.oneshot(get(URI)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["clockback_threshold_seconds"], 86_400);
        assert_eq!(json["data"]["clockback_threshold"], "1d 0h 0m");
        assert_eq!(json["data"]["future_skew_tolerance_seconds"], 0);
        assert_eq!(json["data"]["future_skew_tolerance"], "0m");
    }

    #[tokio::test]
    async fn custom_policy_is_reported() {
        let app = make_test_app_with_policy(TimingPolicy::new(
            Duration::hours(6),
            Duration::minutes(2),
        ));
        let json = body_json(app.oneshot(get(URI)).await.unwrap()).await;
        assert_eq!(json["data"]["clockback_threshold_seconds"], 21_600);
        assert_eq!(json["data"]["future_skew_tolerance"], "2m");
    }
}
