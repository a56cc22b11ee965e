//! Mapping from application errors to JSON responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use expense_tracker_shared::{AppError, FieldError};
use serde_json::json;
use tracing::error;

/// Wrapper that renders an [`AppError`] as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// A body that is not a JSON object is reported like any other bad input.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
        )]))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let body = match &self.0 {
            AppError::Validation(fields) => json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
                "fields": fields,
            }),
            _ => json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
