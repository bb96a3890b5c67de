//! Error types for the API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wisma_core::QueryError;

/// Body message for requests that match no route.
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Body message for a known path requested with an unsupported method.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Body message for requests whose handler panicked.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be understood (e.g. an undecodable path).
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(String),

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An internal error occurred; the message is returned to the client.
    #[error("{0}")]
    Internal(String),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::DataUnavailable => Self::NotFound(err.to_string()),
            QueryError::MalformedSnapshot { .. } | QueryError::MalformedEntry { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "query failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
