//! Error taxonomy for outline requests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// All failures an outline request can surface.
///
/// Every variant maps onto exactly one HTTP status; nothing is retried
/// or recovered locally, and no partial outline is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// Request parameter rejected at the transport layer.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Upstream returned 404 for the requested page.
    #[error("Country not found, please check the country spelling")]
    NotFound,

    /// Upstream answered with a non-404 error status, passed through as-is.
    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    /// The upstream host could not be reached at all.
    #[error("Error connecting to upstream: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Anything else: body decode, selector parse, malformed base URL.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OutlineError {
    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidParams(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OutlineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

pub type OutlineResult<T> = Result<T, OutlineError>;
