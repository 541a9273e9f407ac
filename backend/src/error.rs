//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting:
//! a JSON object with a single `error` field.

use crate::state::WithdrawalError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Author id did not resolve to a known author
    #[error("Author not found")]
    AuthorNotFound,

    /// Withdrawal request was refused by the store
    #[error(transparent)]
    Withdrawal(#[from] WithdrawalError),

    /// Request body could not be read as JSON
    #[error("{0}")]
    InvalidRequest(String),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthorNotFound => StatusCode::NOT_FOUND,
            AppError::Withdrawal(WithdrawalError::AuthorNotFound) => StatusCode::NOT_FOUND,
            AppError::Withdrawal(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
