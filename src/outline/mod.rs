// Copyright 2026 Contour Contributors
// SPDX-License-Identifier: Apache-2.0

//! Outline construction: fetch a page, extract its headings, render
//! Markdown.
//!
//! The service is stateless — each call performs exactly one upstream
//! GET and holds nothing between calls, so concurrent invocations need
//! no coordination.

mod headings;
mod markdown;

pub use headings::{extract_headings, Heading};
pub use markdown::render;

use crate::config::Config;
use crate::error::{OutlineError, OutlineResult};
use crate::fetch::PageClient;
use tracing::{debug, info};
use url::Url;

/// Builds Markdown outlines for country pages.
#[derive(Debug, Clone)]
pub struct OutlineService {
    client: PageClient,
    base: Url,
}

impl OutlineService {
    /// Create a service from resolved configuration.
    ///
    /// Fails if the configured base URL does not parse or cannot carry
    /// path segments.
    pub fn new(config: &Config) -> OutlineResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            OutlineError::Internal(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if base.cannot_be_a_base() {
            return Err(OutlineError::Internal(format!(
                "base URL {base} cannot carry a page title segment"
            )));
        }
        Ok(Self {
            client: PageClient::new(config.timeout_ms),
            base,
        })
    }

    /// Target URL for a country: the base with the name appended as a
    /// single path segment. Reserved characters are percent-encoded.
    pub fn page_url(&self, country: &str) -> OutlineResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                OutlineError::Internal(format!(
                    "base URL {} cannot carry a page title segment",
                    self.base
                ))
            })?
            .pop_if_empty()
            .push(country);
        Ok(url)
    }

    /// Produce the Markdown outline for one country page.
    ///
    /// One upstream GET per call; every failure maps onto
    /// [`OutlineError`] without retry, and no partial outline is
    /// returned.
    pub async fn outline(&self, country: &str) -> OutlineResult<String> {
        let url = self.page_url(country)?;
        debug!(%url, "fetching upstream page");

        let page = self.client.get(&url).await?;
        match page.status {
            404 => return Err(OutlineError::NotFound),
            status if status >= 400 => {
                return Err(OutlineError::UpstreamStatus {
                    status,
                    url: page.final_url,
                })
            }
            _ => {}
        }

        let outline = extract_headings(&page.body)?;
        info!(country, headings = outline.len(), "outline built");
        Ok(render(&outline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> OutlineService {
        OutlineService::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_page_url_appends_country() {
        let url = service().page_url("France").unwrap();
        assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/France");
    }

    #[test]
    fn test_page_url_encodes_reserved_characters() {
        let svc = service();
        assert_eq!(
            svc.page_url("Ivory Coast").unwrap().as_str(),
            "https://en.wikipedia.org/wiki/Ivory%20Coast"
        );
        // A slash cannot escape into an extra path segment.
        assert_eq!(
            svc.page_url("a/b").unwrap().as_str(),
            "https://en.wikipedia.org/wiki/a%2Fb"
        );
        // A question mark cannot start a query string.
        assert!(!svc.page_url("what?").unwrap().as_str().contains('?'));
    }

    #[test]
    fn test_page_url_with_base_missing_trailing_slash() {
        let config = Config {
            base_url: "https://en.wikipedia.org/wiki".to_string(),
            ..Config::default()
        };
        let svc = OutlineService::new(&config).unwrap();
        assert_eq!(
            svc.page_url("France").unwrap().as_str(),
            "https://en.wikipedia.org/wiki/France"
        );
    }

    #[test]
    fn test_new_rejects_unparseable_base() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(OutlineService::new(&config).is_err());
    }

    #[test]
    fn test_new_rejects_segmentless_base() {
        let config = Config {
            base_url: "data:text/plain,hello".to_string(),
            ..Config::default()
        };
        assert!(OutlineService::new(&config).is_err());
    }
}
