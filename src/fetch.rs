//! Async HTTP client wrapping reqwest.
//!
//! Not a browser — one GET per outline request. Bounded timeout,
//! limited redirects, no retries.

use crate::error::OutlineError;
use std::time::Duration;

/// Response from a page fetch.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client for upstream page fetches.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("contour/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET request. Any failure surfaces immediately.
    pub async fn get(&self, url: &url::Url) -> Result<PageResponse, OutlineError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let body = resp
            .text()
            .await
            .map_err(|e| OutlineError::Internal(format!("failed to read response body: {e}")))?;

        Ok(PageResponse {
            final_url,
            status,
            body,
        })
    }
}

/// Connection-level failures surface as 503; anything else is internal.
fn classify_transport_error(e: reqwest::Error) -> OutlineError {
    if e.is_connect() || e.is_timeout() {
        OutlineError::Unreachable(e)
    } else {
        OutlineError::Internal(e.to_string())
    }
}
