//! In-process router tests: the API is exercised end to end without
//! binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use kinerja_api::app::build_app;

fn form_payload() -> serde_json::Value {
    serde_json::json!({
        "identity": {
            "name": "Siti Rahma",
            "employee_number": "199003012024212001",
            "work_unit": "SDN 1 Semanding",
            "contract_start": "2024-03-01",
            "contract_end": "2025-02-28"
        },
        "contract_type": "one_year",
        "discipline": {
            "current": {
                "absence_days": 0,
                "short_hours": 0.0,
                "absent_over_28_days": false,
                "absent_10_consecutive": false
            }
        },
        "task_achievement": "good",
        "integrity": "none",
        "job_availability": "available",
        "behavior": "good",
        "qualification": {
            "education_matched": true,
            "training_hours": 25,
            "orientation_completed": true
        },
        "is_healthy": true
    })
}

fn json_request(uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let app = build_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn compute_evaluation_returns_the_full_result() {
    let app = build_app();
    let response = app
        .oneshot(json_request("/api/evaluations", &form_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["evaluation_id"].is_string());
    assert_eq!(json["total"], 94.0);
    assert_eq!(json["predicate"], "excellent");
    assert_eq!(json["is_eligible"], true);
    assert_eq!(json["fatal_violation"], false);
    assert_eq!(json["scores"]["discipline"], 100.0);
    assert_eq!(json["scores"]["task_achievement"], 80.0);
    assert!(json["recommendation"]
        .as_str()
        .unwrap()
        .contains("RECOMMENDED"));
}

#[tokio::test]
async fn unhealthy_employee_scores_zero_through_the_api() {
    let mut payload = form_payload();
    payload["is_healthy"] = serde_json::json!(false);

    let app = build_app();
    let response = app
        .oneshot(json_request("/api/evaluations", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 0.0);
    assert_eq!(json["predicate"], "very_poor");
    assert_eq!(json["is_eligible"], false);
}

#[tokio::test]
async fn malformed_body_yields_the_error_envelope() {
    let app = build_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/evaluations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"contract_type\": \"two_weeks\"}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "invalid_request");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn export_returns_a_word_attachment() {
    let app = build_app();
    let response = app
        .oneshot(json_request("/api/evaluations/export", &form_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    assert_eq!(content_type, "application/msword");
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("Performance_Evaluation_Siti_Rahma.doc"));

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Siti Rahma"));
    assert!(html.contains("94.00"));
}
