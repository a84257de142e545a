#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use chrono::Duration;
    use serde_json::json;
    use timing::TimingPolicy;
    use tower::ServiceExt;

    use crate::helpers::{body_json, make_test_app, make_test_app_with_policy, post_json};

    const URI: &str = "/api/submissions/timing";

    #[tokio::test]
    async fn late_submission_modified_before_deadline() {
        let app = make_test_app();
        let body = json!({
            "deadline": "2024-01-15T10:00:00Z",
            "uploadedAt": "2024-01-15T12:30:00Z",
            "clientReportedDate": "2024-01-14T09:00:00Z"
        });

        let response = app.oneshot(post_json(URI, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Submission timing analyzed");
        let data = &json["data"];
        assert_eq!(data["status"], "late");
        assert_eq!(data["duration"], "2h 30m");
        assert_eq!(data["is_late_submission"], true);
        assert_eq!(data["is_modified_before_but_submitted_late"], true);
        assert_eq!(data["suspected_time_manipulation"], false);
        assert_eq!(data["deadline"], "2024-01-15 10:00:00 UTC");
    }

    #[tokio::test]
    async fn boundary_is_on_time() {
        let app = make_test_app();
        let body = json!({
            "deadline": "2024-01-15T10:00:00Z",
            "uploaded_at": "2024-01-15T10:00:00Z",
            "client_reported_date": "2024-01-15T10:00:00Z"
        });

        let json = body_json(app.oneshot(post_json(URI, &body)).await.unwrap()).await;
        assert_eq!(json["data"]["status"], "on_time");
        assert_eq!(json["data"]["manipulation"], "none");
    }

    #[tokio::test]
    async fn client_clock_ahead_of_server_is_flagged() {
        let app = make_test_app();
        let body = json!({
            "deadline": "2024-01-15T10:00:00Z",
            "uploadedAt": "2024-01-15T09:00:00Z",
            "clientReportedDate": "2024-01-15T09:20:00Z"
        });

        let json = body_json(app.oneshot(post_json(URI, &body)).await.unwrap()).await;
        assert_eq!(json["data"]["status"], "suspected_manipulation_future");
        assert_eq!(json["data"]["clock_ahead_by"], "20m");
        assert_eq!(json["data"]["suspected_time_manipulation"], true);
    }

    #[tokio::test]
    async fn epoch_millis_are_accepted() {
        let app = make_test_app();
        // 2024-01-14T09:00:00Z as browser File.lastModified
        let body = json!({
            "deadline": "2024-01-15T10:00:00Z",
            "uploadedAt": "2024-01-17T10:00:00Z",
            "clientReportedDate": 1705222800000i64
        });

        let json = body_json(app.oneshot(post_json(URI, &body)).await.unwrap()).await;
        assert_eq!(json["data"]["status"], "suspected_manipulation_clockback");
        assert_eq!(json["data"]["client_reported_date"], "2024-01-14 09:00:00 UTC");
    }

    #[tokio::test]
    async fn configured_threshold_is_used() {
        let policy = TimingPolicy::new(Duration::hours(1), Duration::zero());
        let app = make_test_app_with_policy(policy);
        let body = json!({
            "deadline": "2024-01-15T10:00:00Z",
            "uploadedAt": "2024-01-15T12:30:00Z",
            "clientReportedDate": "2024-01-14T09:00:00Z"
        });

        let json = body_json(app.oneshot(post_json(URI, &body)).await.unwrap()).await;
        assert_eq!(json["data"]["status"], "suspected_manipulation_clockback");
    }

    #[tokio::test]
    async fn missing_client_date_still_resolves_lateness() {
        let app = make_test_app();
        let body = json!({
            "deadline": "2024-01-15T10:00:00Z",
            "uploadedAt": "2024-01-15T12:30:00Z"
        });

        let json = body_json(app.oneshot(post_json(URI, &body)).await.unwrap()).await;
        let data = &json["data"];
        assert_eq!(data["status"], "late");
        assert_eq!(data["lateness"], "late");
        assert_eq!(data["manipulation"], "unavailable");
        assert_eq!(data["client_reported_date"], "N/A");
    }

    #[tokio::test]
    async fn garbage_fields_degrade_instead_of_failing() {
        let app = make_test_app();
        let body = json!({
            "deadline": true,
            "uploadedAt": "not a date",
            "clientReportedDate": [1, 2, 3]
        });

        let response = app.oneshot(post_json(URI, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let data = &json["data"];
        assert_eq!(data["status"], "unavailable");
        assert_eq!(data["uploaded_at"], "N/A");
        assert_eq!(data["deadline"], "N/A");
        assert_eq!(data["client_reported_date"], "N/A");
        assert!(data["limitation"].as_str().unwrap().contains("not a security control"));
    }

    #[tokio::test]
    async fn malformed_json_gets_error_envelope() {
        let app = make_test_app();
        let request = Request::builder()
            .method("POST")
            .uri(URI)
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
    }
}
