//! Heading extraction from parsed HTML.

use crate::error::{OutlineError, OutlineResult};
use scraper::{Html, Selector};

/// Every heading tag, matched together so selection follows document
/// order rather than grouping by level.
const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// A section heading lifted out of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Nesting level, 1–6.
    pub level: u8,
    /// Text content with surrounding whitespace trimmed.
    pub text: String,
}

/// Extract all `h1`–`h6` elements in document order.
///
/// Nested markup contributes its text content; no markup survives.
pub fn extract_headings(html: &str) -> OutlineResult<Vec<Heading>> {
    let selector = Selector::parse(HEADING_SELECTOR)
        .map_err(|e| OutlineError::Internal(format!("failed to parse heading selector: {e}")))?;

    let document = Html::parse_document(html);
    let mut headings = Vec::new();
    for element in document.select(&selector) {
        let Some(level) = heading_level(element.value().name()) else {
            continue;
        };
        let text = element.text().collect::<String>().trim().to_string();
        headings.push(Heading { level, text });
    }
    Ok(headings)
}

/// Numeric suffix of a heading tag name (`"h3"` → 3).
fn heading_level(tag: &str) -> Option<u8> {
    tag.strip_prefix('h')?
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}
