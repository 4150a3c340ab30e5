#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

//! Integration tests for the JSON API, driven through a real axum router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use calc_api::{router, Problem};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

fn json_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

async fn body_problem(response: axum::response::Response) -> Problem {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse Problem JSON")
}

#[tokio::test]
async fn calculate_returns_result_and_echoes_inputs() {
    let response = router()
        .oneshot(json_request(json!({"operation": "add", "num1": 2, "num2": 3})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], json!(5.0));
    assert_eq!(body["operation"], json!("add"));
    assert_eq!(body["num1"], json!(2.0));
    assert_eq!(body["num2"], json!(3.0));
}

#[tokio::test]
async fn calculate_coerces_string_operands() {
    let response = router()
        .oneshot(json_request(
            json!({"operation": "multiply", "num1": "-10", "num2": "5"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], json!(-50.0));
}

#[tokio::test]
async fn divide_by_zero_is_a_client_error_not_a_fault() {
    let response = router()
        .oneshot(json_request(
            json!({"operation": "divide", "num1": "5", "num2": "0"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
    let problem = body_problem(response).await;
    assert_eq!(problem.status, StatusCode::BAD_REQUEST);
    assert_eq!(problem.code, "calc.division_by_zero");
    assert_eq!(problem.detail, "Cannot divide by zero");
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    let response = router()
        .oneshot(json_request(
            json!({"operation": "modulo", "num1": 1, "num2": 2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem = body_problem(response).await;
    assert_eq!(problem.code, "calc.invalid_operation");
}

#[tokio::test]
async fn unparseable_operand_is_rejected() {
    let response = router()
        .oneshot(json_request(
            json!({"operation": "add", "num1": "two", "num2": 3}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem = body_problem(response).await;
    assert_eq!(problem.code, "calc.invalid_operand");
    assert!(problem.detail.contains("num1"));
}

#[tokio::test]
async fn power_supports_fractional_exponents() {
    let response = router()
        .oneshot(json_request(
            json!({"operation": "power", "num1": 4, "num2": 0.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let result = body["result"].as_f64().unwrap();
    assert!((result - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn operations_catalog_lists_five_entries() {
    let request = Request::builder()
        .uri("/api/operations")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ops = body["operations"].as_array().unwrap();
    assert_eq!(ops.len(), 5);
    assert_eq!(ops[0], json!({"key": "add", "symbol": "+", "name": "Addition"}));
    assert_eq!(
        ops[4],
        json!({"key": "power", "symbol": "^", "name": "Power"})
    );
}

#[tokio::test]
async fn health_reports_service_identity() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["service"], json!("calc-server"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let request = Request::builder()
        .uri("/api/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/calculate"].is_object());
}
