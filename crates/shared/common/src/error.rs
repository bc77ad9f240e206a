//! Client-facing error taxonomy.
//!
//! Every failure inside the customer service is folded into one of four
//! kinds before it reaches a caller. Only the kind and a fixed message are
//! visible; underlying causes are logged and dropped.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{
    DomainError, DUPLICATE_EMAIL_MESSAGE, INVALID_CUSTOMER_MESSAGE, PERSISTENCE_FAILURE_MESSAGE,
};
use serde::Serialize;
use thiserror::Error;

/// Application error kinds.
#[derive(Error, Debug)]
pub enum AppError {
    /// Payload or path failed structural validation; carries the detail for logs
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Email already used by another customer
    #[error("email already in use")]
    Conflict,

    /// Id does not resolve to a row
    #[error("Resource not found")]
    NotFound,

    /// Storage or other unexpected failure; carries the detail for logs
    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Conflict => "CONFLICT",
            AppError::NotFound => "NOT_FOUND",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::Conflict | AppError::Persistence(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(detail) => {
                tracing::debug!("Rejected customer payload: {}", detail);
                INVALID_CUSTOMER_MESSAGE.to_string()
            }
            AppError::Conflict => DUPLICATE_EMAIL_MESSAGE.to_string(),
            AppError::NotFound => String::new(),
            AppError::Persistence(detail) => {
                tracing::error!("Persistence error: {}", detail);
                PERSISTENCE_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // NotFound carries no body
        if matches!(self, AppError::NotFound) {
            return status.into_response();
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::InvalidInput(msg),
            DomainError::Hashing(msg) => AppError::Persistence(format!("password hashing: {}", msg)),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        AppError::InvalidInput(detail.into())
    }

    pub fn persistence(detail: impl Into<String>) -> Self {
        AppError::Persistence(detail.into())
    }
}
