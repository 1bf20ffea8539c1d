// HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::CrisisServer;
use crate::crisis::{AnalysisResult, ConfigError, RequestError, ResourceListing};

/// Create the main application router
pub fn create_router(server: Arc<CrisisServer>) -> Router {
    Router::new()
        .route("/analyze", post(handle_analyze))
        .route("/resources", get(get_resources))
        // Health and metrics
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .with_state(server)
}

/// Pull the `message` string out of a request body
fn extract_message(body: Value, max_chars: usize) -> Result<String, RequestError> {
    let message = match body {
        Value::Object(mut fields) => fields.remove("message"),
        _ => None,
    };

    match message {
        Some(Value::String(text)) => {
            let len = text.chars().count();
            if len > max_chars {
                return Err(RequestError::MessageTooLong { len, max: max_chars });
            }
            Ok(text)
        }
        Some(_) => Err(RequestError::InvalidMessageType),
        None => Err(RequestError::MissingMessage),
    }
}

/// Handle POST /analyze - classify a message and return support content
async fn handle_analyze(
    State(server): State<Arc<CrisisServer>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    server.metrics().record_request("analyze");

    let message = payload
        .map_err(|rejection| RequestError::MalformedBody(rejection.body_text()))
        .and_then(|Json(body)| extract_message(body, server.config().max_message_chars))
        .map_err(|e| {
            server.metrics().record_rejected();
            tracing::info!(error = %e, "Rejected analysis request");
            ApiError::BadRequest(e)
        })?;

    let result = server.analyzer().analyze(&message)?;
    server.metrics().record_classification(result.category);

    tracing::info!(
        category = %result.category,
        severity = %result.severity,
        message_chars = message.chars().count(),
        "Message analyzed"
    );

    Ok(Json(result))
}

/// Handle GET /resources - full helpline directory and self-care bundle
async fn get_resources(State(server): State<Arc<CrisisServer>>) -> Json<ResourceListing> {
    server.metrics().record_request("resources");
    Json(server.analyzer().resources().clone())
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
}

/// Handle GET /health - Health check endpoint
pub async fn health_check(State(server): State<Arc<CrisisServer>>) -> Json<HealthStatus> {
    server.metrics().record_request("health");
    Json(HealthStatus {
        status: "healthy".to_string(),
        uptime_seconds: server.uptime_seconds(),
    })
}

/// Handle GET /metrics - Prometheus metrics endpoint
pub async fn metrics_endpoint(
    State(server): State<Arc<CrisisServer>>,
) -> Result<Response, ApiError> {
    let body = server.metrics().render().map_err(ApiError::Internal)?;

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}

/// Application error with HTTP mapping.
///
/// Input problems are echoed back to the caller. Anything else is logged
/// and reported with a generic message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(RequestError),
    Config(ConfigError),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(e) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error", e.to_string())
            }
            ApiError::Config(e) => {
                tracing::error!(error = %e, "Reference data defect reached a request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "api_error",
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "api_error",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": {
                "message": message,
                "type": error_type
            }
        });

        (status, Json(body)).into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::BadRequest(err)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(json!({"message": "hello"}), 100),
            Ok("hello".to_string())
        );
        assert_eq!(extract_message(json!({"message": ""}), 100), Ok(String::new()));
    }

    #[test]
    fn test_extract_message_rejects_bad_shapes() {
        assert_eq!(
            extract_message(json!({"text": "hello"}), 100),
            Err(RequestError::MissingMessage)
        );
        assert_eq!(
            extract_message(json!({"message": 42}), 100),
            Err(RequestError::InvalidMessageType)
        );
        assert_eq!(
            extract_message(json!({"message": null}), 100),
            Err(RequestError::InvalidMessageType)
        );
        assert_eq!(
            extract_message(json!(["message"]), 100),
            Err(RequestError::MissingMessage)
        );
    }

    #[test]
    fn test_extract_message_counts_chars() {
        // 3 characters, 9 bytes
        assert!(extract_message(json!({"message": "ममम"}), 3).is_ok());
        assert_eq!(
            extract_message(json!({"message": "abcd"}), 3),
            Err(RequestError::MessageTooLong { len: 4, max: 3 })
        );
    }
}
