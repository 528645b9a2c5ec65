//! Error handling for the Pharmacy Inventory Management Platform
//!
//! Error responses carry a plain-text body; the frontend surfaces it verbatim
//! in an alert.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Not enough quantity. Available: {available}")]
    InsufficientStock { available: u32 },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InsufficientStock { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
