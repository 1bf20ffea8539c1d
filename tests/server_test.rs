// Integration tests for HTTP server

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use crisis_support::{
    config::ServerConfig,
    crisis::CrisisAnalyzer,
    server::CrisisServer,
};
use serde_json::Value;
use tower::ServiceExt;

fn test_app(max_message_chars: usize) -> Router {
    let analyzer = CrisisAnalyzer::builtin().expect("built-in data must validate");
    let server_config = ServerConfig {
        bind_address: "127.0.0.1:0".to_string(), // Use port 0 for test
        max_message_chars,
    };

    CrisisServer::new(server_config, analyzer)
        .expect("Failed to create server")
        .into_app()
}

async fn post_analyze(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_analyze_high_risk() {
    let (status, body) =
        post_analyze(test_app(5000), r#"{"message": "I want to end it all"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["severity"], "CRITICAL");
    assert_eq!(body["color"], "red");
    assert_eq!(body["helpline_details"][0]["name"], "iCall Suicide Prevention");
    assert_eq!(body["helpline_details"][0]["available"], "Mon-Sat 8AM-10PM");
    assert_eq!(body["tips"].as_array().unwrap().len(), 5);
    assert!(body["immediate_action"].as_str().unwrap().contains("RIGHT NOW"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_analyze_empty_message_is_general() {
    let (status, body) = post_analyze(test_app(5000), r#"{"message": ""}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["severity"], "NORMAL");
    assert_eq!(body["color"], "green");
}

#[tokio::test]
async fn test_analyze_missing_message() {
    let (status, body) = post_analyze(test_app(5000), r#"{"text": "hello"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(body["error"]["message"], "missing required field 'message'");
}

#[tokio::test]
async fn test_analyze_non_string_message() {
    let (status, body) = post_analyze(test_app(5000), r#"{"message": ["flood"]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "field 'message' must be a string");
}

#[tokio::test]
async fn test_analyze_malformed_json() {
    let (status, body) = post_analyze(test_app(5000), "{ message: ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_analyze_message_too_long() {
    let (status, body) = post_analyze(test_app(10), r#"{"message": "there is a flood here"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("limit is 10"));
}

#[tokio::test]
async fn test_resources() {
    let (status, body) = get(test_app(5000), "/resources").await;
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["helplines"].as_object().unwrap().len(), 6);
    assert_eq!(body["helplines"]["medical"]["number"], "108");
    assert!(body["self_care"]["breathing"].as_str().unwrap().contains("4-7-8"));
    assert_eq!(body["emergency_numbers"]["All India"]["Fire"], "101");
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(test_app(5000), "/health").await;
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_count_classifications() {
    let app = test_app(5000);

    post_analyze(app.clone(), r#"{"message": "He has chest pain"}"#).await;
    post_analyze(app.clone(), r#"{"nope": 1}"#).await;

    let (status, text) = get(app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("crisis_support_classifications_total{category=\"medical\"} 1"));
    assert!(text.contains("crisis_support_requests_total{endpoint=\"analyze\"} 2"));
    assert!(text.contains("crisis_support_rejected_requests_total 1"));
}
