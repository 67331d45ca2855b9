//! Logo extraction
//!
//! An ordered list of selector heuristics, most specific first. The first
//! selector that matches anything decides the attempt: its first element's
//! `src` is resolved and returned, and a match without `src` ends the
//! search rather than handing the page to a weaker selector. Pages where no
//! selector produces a usable `src` fall back to the icon link.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::url::resolve_url;

// Tried in priority order; first match wins the attempt.
const LOGO_SELECTORS: [&str; 6] = [
    r#"img[class*="logo"]"#,
    r#"img[id*="logo"]"#,
    r#"a[class*="logo"] img"#,
    "header img",
    ".navbar-brand img",
    r#"[class*="brand"] img"#,
];

static LOGO_SELECTOR_LIST: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    LOGO_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("logo selector"))
        .collect()
});

static ICON_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel="icon"]"#).expect("icon selector"));

static SHORTCUT_ICON_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="shortcut icon"]"#).expect("shortcut icon selector")
});

/// Logo extraction over a parsed document
pub struct LogoExtractor;

impl LogoExtractor {
    /// Extract an absolute logo URL, or `None` when the page offers no
    /// usable signal. Never fails.
    pub fn extract(document: &Html, base_url: &str) -> Option<String> {
        let mut src: Option<&str> = None;
        for (index, selector) in LOGO_SELECTOR_LIST.iter().enumerate() {
            if let Some(element) = document.select(selector).next() {
                debug!(selector = LOGO_SELECTORS[index], "logo selector matched");
                src = element.value().attr("src");
                break;
            }
        }

        if let Some(src) = src {
            return Some(resolve_url(src, base_url));
        }

        // Icon link fallback. Unlike the selector path, only the
        // root-relative href form is anchored to the base URL here.
        let favicon = icon_href(document, &ICON_LINK)
            .or_else(|| icon_href(document, &SHORTCUT_ICON_LINK))?;
        if favicon.starts_with('/') {
            Some(format!("{base_url}{favicon}"))
        } else {
            Some(favicon)
        }
    }
}

fn icon_href(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|v| v.to_string())
}
