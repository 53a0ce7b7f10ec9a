//! Error types for the keyserver.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors returned by keyserver handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No key registered under that identifier.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The request body was not usable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
