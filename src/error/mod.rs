//! Application error types and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every 5xx; the underlying cause only goes to the log.
pub const SERVER_ERROR_MESSAGE: &str = "Server error.";
/// Message returned when the Authorization header cannot be used.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token.";

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("The user does not exist")]
    AccountNotFound,

    #[error("Invalid Password")]
    InvalidPassword,

    #[error("{0}")]
    Unauthorized(String),

    #[error("Server error: {0}")]
    Server(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::AccountNotFound => StatusCode::BAD_REQUEST,
            AppError::InvalidPassword | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Server(e) => {
                tracing::error!(error = %e, "request failed");
                SERVER_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
