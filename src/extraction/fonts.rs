//! Font pair extraction
//!
//! Looks at Google Fonts stylesheet links only. The first family discovered
//! becomes the heading font, the next one the body font; anything beyond
//! that is ignored.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Fallback family when a slot stays empty
pub const DEFAULT_FONT: &str = "Inter";

static GOOGLE_FONTS_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[href*="fonts.googleapis.com"]"#).expect("google fonts selector")
});

// family= value up to the next ':' (weight/style axis) or '&'
static FAMILY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"family=([^:&]+)").expect("family pattern"));

/// The extracted heading/body font pair, always populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandFonts {
    /// Heading font family
    pub heading: String,
    /// Body font family
    pub body: String,
}

impl Default for BrandFonts {
    fn default() -> Self {
        Self {
            heading: DEFAULT_FONT.to_string(),
            body: DEFAULT_FONT.to_string(),
        }
    }
}

/// Font extraction over a parsed document
pub struct FontExtractor;

impl FontExtractor {
    /// Extract the font pair. Never fails; pages without Google Fonts links
    /// get [`DEFAULT_FONT`] for both slots.
    pub fn extract(document: &Html) -> BrandFonts {
        let mut heading: Option<String> = None;
        let mut body: Option<String> = None;

        for link in document.select(&GOOGLE_FONTS_LINK) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Some(caps) = FAMILY_PARAM.captures(href) else {
                continue;
            };
            let family = decode_family(&caps[1]);

            // First discovery fills heading, the next fills body. No
            // dedup beyond the only-assign-when-empty guard.
            if heading.is_none() {
                heading = Some(family);
            } else if body.is_none() {
                body = Some(family);
            }
        }

        BrandFonts {
            heading: heading.unwrap_or_else(|| DEFAULT_FONT.to_string()),
            body: body.unwrap_or_else(|| DEFAULT_FONT.to_string()),
        }
    }
}

/// Recover a human-readable family name from the `family=` query value:
/// literal `+` becomes a space, then percent-encoding is decoded.
fn decode_family(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.clone(),
    }
}
