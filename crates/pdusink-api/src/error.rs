//! Error types for the ingestion API.
//!
//! [`ApiError`] covers every request-scoped failure and converts into an
//! Axum HTTP response via its [`IntoResponse`] implementation. Response
//! bodies carry a fixed message per variant; the underlying cause is only
//! written to the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pdusink_db::DbError;
use pdusink_types::ErrorResponse;

use crate::auth::AuthFailure;

/// Errors that can occur while handling a submission.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing, malformed, or mismatched bearer credential.
    #[error("unauthorized: {0}")]
    Unauthorized(AuthFailure),

    /// The body could not be read or decoded into a submission.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The record could not be written.
    #[error("storage failure: {0}")]
    StorageFailure(#[from] DbError),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message for this error.
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "Unauthorized",
            Self::InvalidPayload(_) => "Invalid request payload",
            Self::StorageFailure(_) => "Failed to save PDU",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Unauthorized(reason) => {
                tracing::warn!(reason = reason.as_str(), "Rejected unauthenticated submission");
            }
            Self::InvalidPayload(reason) => {
                tracing::warn!(reason = %reason, "Rejected invalid submission payload");
            }
            Self::StorageFailure(e) => {
                tracing::error!(error = %e, "Failed to persist PDU");
            }
        }

        let body = ErrorResponse::new(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}
