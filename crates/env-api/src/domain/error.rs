//! API error types.
//!
//! Failures reach the caller as a structured [`EnvResponse`] body with a
//! non-2xx status, never as a dropped connection.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use env_types::{EnvResponse, FETCH_FAILED_MESSAGE};
use std::fmt;
use std::time::Duration;

/// Failure while reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvReadError {
    /// A name or value is not valid Unicode
    #[error("environment variable {key:?} is not valid unicode")]
    NotUnicode { key: String },

    /// The source cannot be read at all
    #[error("environment unavailable: {0}")]
    Unavailable(String),
}

/// HTTP-facing error: a status plus the message placed in the body.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Response status
    pub status: StatusCode,
    /// Message for the `error` field
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Environment could not be read (500)
    pub fn fetch_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE)
    }

    /// Request exceeded its time budget (504)
    pub fn timeout(limit: Duration) -> Self {
        Self::new(
            StatusCode::GATEWAY_TIMEOUT,
            format!("Request exceeded {} timeout", format_limit(limit)),
        )
    }

    /// Failure body for this error.
    pub fn to_body(&self) -> EnvResponse {
        EnvResponse::failure(self.message.clone())
    }
}

/// `10s` for whole seconds, `500ms` otherwise.
fn format_limit(limit: Duration) -> String {
    if limit.subsec_millis() == 0 {
        format!("{}s", limit.as_secs())
    } else {
        format!("{}ms", limit.as_millis())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<EnvReadError> for ApiError {
    fn from(_: EnvReadError) -> Self {
        // Read details stay in the server log
        ApiError::fetch_failed()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.to_body();
        (self.status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Service-level errors (startup and serving)
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] crate::domain::config::ConfigError),

    /// Server socket bind error
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
