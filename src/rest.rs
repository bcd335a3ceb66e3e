// Copyright 2026 Contour Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP REST API for Contour.
//!
//! Two renderings of the same outline: the raw Markdown as text/plain
//! and an HTML page with the outline embedded. Every request is
//! independent — the shared [`AppState`] only carries the service
//! handle, so no locks are needed.

use crate::config::Config;
use crate::error::OutlineError;
use crate::outline::OutlineService;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Shared state passed to request handlers.
pub struct AppState {
    pub service: OutlineService,
    pub started_at: Instant,
}

/// Outline endpoint query parameters.
#[derive(serde::Deserialize)]
struct OutlineParams {
    country: String,
}

/// Build the axum Router with all REST endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/outline", get(outline_text))
        .route("/outline", get(outline_page))
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server on the given port (loopback only).
pub async fn start(config: &Config) -> anyhow::Result<()> {
    let service = OutlineService::new(config)?;
    let state = Arc::new(AppState {
        service,
        started_at: Instant::now(),
    });
    let app = router(state);

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("REST API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.started_at.elapsed().as_secs_f64(),
    }))
}

/// Plain-text variant: the raw Markdown outline.
async fn outline_text(
    Query(params): Query<OutlineParams>,
    State(state): State<Arc<AppState>>,
) -> Result<String, OutlineError> {
    let country = require_country(&params)?;
    state.service.outline(country).await
}

/// Templated variant: the outline embedded in an HTML page.
async fn outline_page(
    Query(params): Query<OutlineParams>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, OutlineError> {
    let country = require_country(&params)?;
    let markdown = state.service.outline(country).await?;
    Ok(Html(render_page(&markdown)))
}

/// Reject empty country values at the transport layer. The value is
/// otherwise passed through verbatim.
fn require_country(params: &OutlineParams) -> Result<&str, OutlineError> {
    if params.country.trim().is_empty() {
        return Err(OutlineError::InvalidParams(
            "country must not be empty".to_string(),
        ));
    }
    Ok(&params.country)
}

/// Substitute the outline into the embedded page template.
///
/// The Markdown is HTML-escaped before substitution so heading text
/// cannot inject markup into the page.
fn render_page(markdown_outline: &str) -> String {
    include_str!("outline.html").replace("{{markdown_outline}}", &escape_html(markdown_outline))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("## R&D <em>"), "## R&amp;D &lt;em&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_page_substitutes_placeholder() {
        let page = render_page("# France\n");
        assert!(page.contains("# France\n"));
        assert!(!page.contains("{{markdown_outline}}"));
    }

    #[test]
    fn test_require_country_rejects_empty() {
        let params = OutlineParams {
            country: "   ".to_string(),
        };
        let err = require_country(&params).unwrap_err();
        assert!(matches!(err, OutlineError::InvalidParams(_)));
    }

    #[test]
    fn test_require_country_passes_value_verbatim() {
        let params = OutlineParams {
            country: " France ".to_string(),
        };
        assert_eq!(require_country(&params).unwrap(), " France ");
    }
}
