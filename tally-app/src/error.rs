//! Error types and response handling for the web server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tally_core::CoreError;
use tally_store::StoreError;
use thiserror::Error;

/// Errors raised while serving a request or starting the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Counter repository failure.
    #[error("Counter unavailable: {0}")]
    Core(#[from] CoreError),

    /// Store setup or configuration failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A blocking store task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Malformed request, such as an unknown action.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Socket errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Core(CoreError::InvalidAction(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Core(_) | AppError::Store(_) | AppError::Join(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Error type string for JSON responses.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::InvalidAction(_)) | AppError::InvalidRequest(_) => {
                "invalid_request"
            }
            AppError::Core(_) | AppError::Store(_) => "storage_error",
            AppError::Join(_) => "internal_error",
            AppError::Io(_) => "io_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_status_code() {
        let err = AppError::InvalidRequest("Unknown counter action: double".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "invalid_request");
    }

    #[test]
    fn test_storage_status_code() {
        let err = AppError::Core(CoreError::storage("disk I/O error"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "storage_error");
    }

    #[test]
    fn test_error_response_format() {
        let err = AppError::InvalidRequest("bad".into());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
