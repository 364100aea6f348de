//! # Admin API Errors
//!
//! Error types for the admin HTTP endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::engine::EngineError;
use crate::store::StoreError;

/// Result type for admin handlers
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin API errors
#[derive(Debug, Error)]
pub enum AdminError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Reorder endpoint called without the AJAX marker header
    #[error("Reorder requests must be sent via XMLHttpRequest")]
    NotAjax,

    /// Required form field missing
    #[error("Missing required form field: {0}")]
    MissingField(String),

    /// Form field present but not a valid integer
    #[error("Invalid integer in form field: {0}")]
    InvalidFormInt(String),

    /// Unrecognized bulk action name
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Reorder engine rejected the request
    #[error("{0}")]
    Engine(#[from] EngineError),
}

impl AdminError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::NotAjax => StatusCode::BAD_REQUEST,
            AdminError::MissingField(_) => StatusCode::BAD_REQUEST,
            AdminError::InvalidFormInt(_) => StatusCode::BAD_REQUEST,
            AdminError::UnknownAction(_) => StatusCode::BAD_REQUEST,

            AdminError::Engine(engine_err) => match engine_err {
                EngineError::OrderOutOfRange { .. } => StatusCode::BAD_REQUEST,
                EngineError::EmptySelection => StatusCode::BAD_REQUEST,
                EngineError::UnknownRecord(_) => StatusCode::BAD_REQUEST,
                EngineError::Store(StoreError::RecordNotFound(_)) => StatusCode::NOT_FOUND,
                EngineError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<AdminError> for ErrorResponse {
    fn from(err: AdminError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
