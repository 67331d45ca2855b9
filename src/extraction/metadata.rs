//! Page metadata extraction
//!
//! Title, description, and favicon. Title prefers the `<title>` element and
//! falls back to `og:title`; description prefers the standard meta tag and
//! falls back to `og:description`; the favicon falls back to the literal
//! `/favicon.ico` path when the page declares no icon link.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Default favicon path assumed when no icon link is present
pub const DEFAULT_FAVICON_PATH: &str = "/favicon.ico";

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").expect("title"));

static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("og:title selector")
});

static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("description selector")
});

static OG_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("og:description selector")
});

static ICON_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel="icon"]"#).expect("icon selector"));

static SHORTCUT_ICON_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="shortcut icon"]"#).expect("shortcut icon selector")
});

/// Extracted page metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title, trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Favicon URL, absolute when the page used a root-relative path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// Metadata extraction over a parsed document
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract title, description, and favicon. Never fails.
    pub fn extract(document: &Html, base_url: &str) -> PageMetadata {
        let title = document
            .select(&TITLE)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| attr_content(document, &OG_TITLE));

        let description = attr_content(document, &META_DESCRIPTION)
            .or_else(|| attr_content(document, &OG_DESCRIPTION));

        let favicon_href = attr(document, &ICON_LINK, "href")
            .or_else(|| attr(document, &SHORTCUT_ICON_LINK, "href"))
            .unwrap_or_else(|| DEFAULT_FAVICON_PATH.to_string());

        // Only the root-relative form is anchored to the base URL.
        let favicon = if favicon_href.starts_with('/') {
            format!("{base_url}{favicon_href}")
        } else {
            favicon_href
        };

        PageMetadata {
            title,
            description,
            favicon: Some(favicon),
        }
    }
}

fn attr(document: &Html, selector: &Selector, name: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(name))
        .map(|v| v.to_string())
}

fn attr_content(document: &Html, selector: &Selector) -> Option<String> {
    attr(document, selector, "content")
}
