use super::service;
use super::types::{HealthResponse, ValidationErrorBody};
use crate::schema::{FieldError, HelloResponse, validate_hello_input};
use axum::{body::Bytes, http::StatusCode, response::Json};
use serde_json::Value;
use tracing::warn;

/// `POST /hello`: the backend contract.
///
/// The body is read raw and pushed through the shared validation rule so
/// malformed JSON and invalid payloads both surface as the same class of
/// client error, with field-level detail.
pub async fn hello(
    body: Bytes,
) -> Result<Json<HelloResponse>, (StatusCode, Json<ValidationErrorBody>)> {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejected unparsable request body: {}", e);
            return Err(validation_rejection(vec![FieldError {
                field: "body".to_string(),
                message: "Invalid JSON".to_string(),
            }]));
        }
    };

    match validate_hello_input(&value) {
        Ok(input) => Ok(Json(service::process_hello(&input))),
        Err(e) => {
            warn!("Validation failed: {}", e);
            Err(validation_rejection(e.issues))
        }
    }
}

/// `POST /api/hello`: the edge-layer variant.
///
/// Same rule, but the error body carries only the first issue's message,
/// matching the server-rendered app boundary.
pub async fn edge_hello(body: Bytes) -> (StatusCode, Json<HelloResponse>) {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(HelloResponse::failure("Invalid JSON")),
            );
        }
    };

    match validate_hello_input(&value) {
        Ok(input) => (StatusCode::OK, Json(service::process_hello(&input))),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(HelloResponse::failure(e.first_message())),
        ),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn validation_rejection(errors: Vec<FieldError>) -> (StatusCode, Json<ValidationErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorBody {
            success: false,
            message: "Validation failed".to_string(),
            errors,
        }),
    )
}
