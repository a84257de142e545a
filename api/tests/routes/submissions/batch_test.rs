#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::helpers::{body_json, make_test_app, post_json};

    const URI: &str = "/api/submissions/timing/batch";

    #[tokio::test]
    async fn batch_preserves_order_ids_and_counts() {
        let app = make_test_app();
        let body = json!({
            "submissions": [
                {
                    "id": 17,
                    "deadline": "2024-01-15T10:00:00Z",
                    "uploadedAt": "2024-01-15T12:30:00Z",
                    "clientReportedDate": "2024-01-14T09:00:00Z"
                },
                {
                    "id": "abc",
                    "deadline": "2024-01-15T10:00:00Z",
                    "uploadedAt": "2024-01-15T09:00:00Z"
                },
                {
                    "uploadedAt": "2024-01-15T09:00:00Z"
                }
            ]
        });

        let response = app.oneshot(post_json(URI, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Analyzed 3 submissions");

        let data = &json["data"];
        assert_eq!(data["total"], 3);

        let results = data["results"].as_array().unwrap();
        assert_eq!(results[0]["id"], 17);
        assert_eq!(results[0]["report"]["status"], "late");
        assert_eq!(results[1]["id"], "abc");
        assert_eq!(results[1]["report"]["status"], "on_time");
        assert_eq!(results[2]["id"], Value::Null);
        assert_eq!(results[2]["report"]["status"], "unavailable");

        let counts = &data["counts"];
        assert_eq!(counts["late"], 1);
        assert_eq!(counts["on_time"], 1);
        assert_eq!(counts["unavailable"], 1);
        assert_eq!(counts["suspected_manipulation_future"], 0);
        assert_eq!(counts["suspected_manipulation_clockback"], 0);
        assert_eq!(counts["late_and_modified_after_deadline"], 0);
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let app = make_test_app();
        let body = json!({ "submissions": [] });

        let response = app.oneshot(post_json(URI, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "submissions must contain between 1 and 500 entries"
        );
    }

    #[tokio::test]
    async fn oversized_batch_is_rejected() {
        let app = make_test_app();
        let item = json!({ "uploadedAt": "2024-01-15T09:00:00Z", "deadline": "2024-01-15T10:00:00Z" });
        let body = json!({ "submissions": vec![item; 501] });

        let response = app.oneshot(post_json(URI, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_submissions_field_is_unprocessable() {
        let app = make_test_app();
        let response = app.oneshot(post_json(URI, &json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }
}
