//! Error handling for the Fusion API
//!
//! Every handler returns [`ApiResult`]; errors carry their own HTTP status and
//! a stable error code and render as `{"error": {"code": ..., "message": ...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use fusion_calculator::CalculatorError;
use fusion_core::DashboardError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Validation errors (400 Bad Request)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found (404 Not Found)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Inputs were well-formed but could not be computed (422 Unprocessable Entity)
    #[error("Calculation error: {message}")]
    Calculation { message: String },

    /// Internal server errors (500 Internal Server Error)
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Calculation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Calculation { .. } => "CALCULATION_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            error: ApiErrorBody { code: self.error_code().to_string(), message: self.to_string() },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    pub fn calculation(message: impl Into<String>) -> Self {
        Self::Calculation { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

/// JSON error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), "Request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::UnknownLens(_) => ApiError::validation(err.to_string()),
            _ if err.is_input_error() => ApiError::calculation(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        match err {
            CalculatorError::InvalidArgument { .. } => ApiError::validation(err.to_string()),
            CalculatorError::NotFound(name) => ApiError::not_found(format!("calculator '{name}'")),
            CalculatorError::Allocation(_) => ApiError::calculation(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("JSON parsing error: {err}"))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
