// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::services::ServiceError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every handler funnels into this type, so the wire contract lives in one
/// place: client faults are 4xx with a JSON-encoded message string, an empty
/// lookup is a bare 404, and anything that went wrong on our side is a 500
/// that names the failed operation without leaking internals.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - request body or path could not be decoded
    Malformed(String),

    // 400 Bad Request - decoded fine, but a business rule rejected a value
    InvalidValue(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 409 Conflict
    AlreadyExists(String),

    // 404 Not Found - lookup matched nothing, response carries no body
    Empty,

    // 500 Internal Server Error - short static description of the failed operation
    Service(&'static str),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Malformed(_) => 400,
            ApiError::InvalidValue(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::AlreadyExists(_) => 409,
            ApiError::Empty => 404,
            ApiError::Service(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Malformed(msg) => msg,
            ApiError::InvalidValue(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::AlreadyExists(msg) => msg,
            ApiError::Empty => "",
            ApiError::Service(msg) => msg,
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::Malformed(message.into())
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        ApiError::InvalidValue(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    /// Classify a service failure at the dispatch boundary.
    ///
    /// Domain outcomes (duplicate login, bad credentials) keep their own
    /// status codes. Everything else is logged with full detail and reported
    /// to the client as `operation` only.
    pub fn failed(operation: &'static str, err: ServiceError) -> Self {
        match err {
            ServiceError::AlreadyExists(login) => {
                ApiError::AlreadyExists(format!("user with login '{}' already exists", login))
            }
            ServiceError::InvalidCredentials => {
                ApiError::unauthorized("incorrect login or password")
            }
            err => {
                tracing::error!("{}: {}", operation, err);
                ApiError::Service(operation)
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            // No-match responses carry no body at all
            ApiError::Empty => status.into_response(),
            other => (status, Json(other.message())).into_response(),
        }
    }
}
