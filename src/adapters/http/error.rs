//! Error mapping from domain errors to HTTP responses.
//!
//! Every failure leaves the service as `{ "success": false, "message": ... }`.
//! Only the public message is serialized; internal causes go to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

const INVALID_BODY: &str = "Invalid request body";

/// Body of every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The body or query string could not be decoded.
    InvalidBody(String),
    /// A handler rejected the request or failed.
    Domain(DomainError),
}

impl ApiError {
    /// Wraps an extractor rejection; the rejection text is only logged.
    pub fn invalid_body(rejection: impl std::fmt::Display) -> Self {
        ApiError::InvalidBody(rejection.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(err) => status_for(err.code()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

/// HTTP status for each error class.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::HashingError
        | ErrorCode::DatabaseError
        | ErrorCode::Timeout
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidBody(reason) => {
                tracing::warn!(%reason, "Rejected malformed request");
                FailureResponse::new(INVALID_BODY)
            }
            ApiError::Domain(err) => {
                if err.code().is_client_error() {
                    tracing::warn!(code = %err.code(), reason = err.message(), "Request rejected");
                } else {
                    tracing::error!(
                        code = %err.code(),
                        reason = err.message(),
                        cause = err.cause().unwrap_or("unknown"),
                        "Request failed"
                    );
                }
                FailureResponse::new(err.message())
            }
        };

        (status, Json(body)).into_response()
    }
}
