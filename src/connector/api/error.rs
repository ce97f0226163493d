use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::ValidationError;

/// Error responses of the HTTP API. Bodies never carry internal detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Internal,
}

impl ApiError {
    pub fn invalid_json() -> Self {
        Self::BadRequest("Invalid JSON".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::BadRequest(message) => json!({ "error": message }),
            Self::Internal => json!({ "error": "Internal server error", "status": "error" }),
        };
        (status, Json(body)).into_response()
    }
}
