//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sympathy_core::error::DramaError;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// The engine could not be assembled.
    #[error(transparent)]
    Drama(#[from] DramaError),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DramaError` that implements `IntoResponse`.
///
/// An invalid command is treated as an authorization-style failure, the
/// way the story has always rejected unrecognized input: 401, no state
/// mutated. Everything else is internal.
#[derive(Debug)]
pub struct ApiError(pub DramaError);

impl From<DramaError> for ApiError {
    fn from(err: DramaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DramaError::InvalidCommand(_) => (StatusCode::UNAUTHORIZED, "invalid_command"),
            DramaError::PatternConflict { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "pattern_conflict")
            }
            DramaError::SceneLoad(_) => (StatusCode::INTERNAL_SERVER_ERROR, "scene_load_failed"),
            DramaError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
