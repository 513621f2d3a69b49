use crate::schema::FieldError;
use serde::Serialize;

/// Body returned by `POST /hello` when the payload is rejected.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub success: bool,
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
