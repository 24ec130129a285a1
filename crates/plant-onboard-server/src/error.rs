//! Error responses

use axum::http::StatusCode;
use axum::Json;
use plant_onboard::{CsvError, TemplateError};
use serde::{Deserialize, Serialize};

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of a handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build an error response
pub fn api_error<S: Into<String>>(status: StatusCode, message: S) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// 500 response; the cause is logged, not returned
pub fn internal_error<E: std::fmt::Display>(err: E) -> ApiError {
    tracing::error!(error = %err, "request failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub fn template_error(err: TemplateError) -> ApiError {
    match err {
        TemplateError::NotFound { .. } => api_error(StatusCode::NOT_FOUND, "Template not found"),
        TemplateError::InvalidName(_) => api_error(StatusCode::BAD_REQUEST, err.to_string()),
        TemplateError::Io(_) | TemplateError::Json(_) => internal_error(err),
    }
}

pub fn csv_error(err: CsvError) -> ApiError {
    match err {
        CsvError::Io(_) => internal_error(err),
        _ => api_error(StatusCode::BAD_REQUEST, err.to_string()),
    }
}
