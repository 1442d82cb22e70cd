//! Service-layer error taxonomy
//!
//! `ServiceError` bridges the DB layer and the HTTP adapter: missing rows
//! collapse to `NotFound`, any other store failure to `Internal`, and the
//! adapter adds `InvalidRequest` for malformed client input. Response bodies
//! carry only the standard status text; the underlying cause is logged and
//! never serialized.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No row matched the given key
    #[error("record not found")]
    NotFound,
    /// Malformed client input, rejected before the service runs
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
    /// Any other store-level failure; the cause is kept for logging only
    #[error("internal error")]
    Internal(#[source] BoxError),
}

impl ServiceError {
    pub fn internal(err: impl Into<BoxError>) -> Self {
        ServiceError::Internal(err.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::Internal(cause) => {
                tracing::error!(error = %cause, "store operation failed");
            }
            ServiceError::InvalidRequest(reason) => {
                tracing::debug!(%reason, "rejected malformed request");
            }
            ServiceError::NotFound => {}
        }
        let status = self.status();
        (status, status.canonical_reason().unwrap_or("")).into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
