//! Brand color extraction
//!
//! Colors are found by pattern matching over `<style>` tag text and inline
//! `style` attributes, not by resolving the CSS cascade. Matched tokens are
//! normalized to 6-digit lowercase hex, near-neutral colors are filtered
//! out, and the survivors are ranked by how often they occur on the page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed background default, never derived from the page
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Fixed text-color default, never derived from the page
pub const DEFAULT_TEXT: &str = "#1a1a1a";

/// Channel spread below which a color counts as grayscale
const GRAYSCALE_SPREAD: u8 = 20;

// hsl() is matched here but normalize_color has no conversion for it, so
// such tokens never reach the ranking.
static COLOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[0-9a-fA-F]{3,6}|rgb\([^)]+\)|rgba\([^)]+\)|hsl\([^)]+\)")
        .expect("color token pattern")
});

static RGB_CHANNEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern"));

static STYLE_TAG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("style").expect("style selector"));

static STYLED_ELEMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[style]").expect("[style] selector"));

/// The extracted color palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandColors {
    /// Most frequent chromatic color on the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Second most frequent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Third most frequent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Always [`DEFAULT_BACKGROUND`]
    pub background: String,
    /// Always [`DEFAULT_TEXT`]
    pub text: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: None,
            secondary: None,
            accent: None,
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

/// Occurrence tally that remembers first-encounter order, so ties rank in
/// the order the page introduced them.
#[derive(Debug, Default)]
struct ColorTally {
    entries: Vec<(String, usize)>,
}

impl ColorTally {
    fn record(&mut self, color: String) {
        match self.entries.iter_mut().find(|(c, _)| *c == color) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((color, 1)),
        }
    }

    /// Colors by descending frequency; the sort is stable, so equal counts
    /// keep insertion order.
    fn ranked(self) -> Vec<String> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(color, _)| color).collect()
    }
}

/// Color extraction over a parsed document
pub struct ColorExtractor;

impl ColorExtractor {
    /// Extract the brand palette. Never fails; a page without usable colors
    /// yields the fixed defaults with the top-three slots empty.
    pub fn extract(document: &Html) -> BrandColors {
        let mut tally = ColorTally::default();

        for style in document.select(&STYLE_TAG) {
            let css: String = style.text().collect();
            Self::scan(&css, &mut tally);
        }

        for element in document.select(&STYLED_ELEMENT) {
            if let Some(style) = element.value().attr("style") {
                Self::scan(style, &mut tally);
            }
        }

        let ranked = tally.ranked();
        debug!(candidates = ranked.len(), "ranked chromatic colors");

        let mut ranked = ranked.into_iter();
        BrandColors {
            primary: ranked.next(),
            secondary: ranked.next(),
            accent: ranked.next(),
            ..BrandColors::default()
        }
    }

    fn scan(text: &str, tally: &mut ColorTally) {
        for token in COLOR_TOKEN.find_iter(text) {
            if let Some(normalized) = normalize_color(token.as_str()) {
                if !is_grayscale(&normalized) {
                    tally.record(normalized);
                }
            }
        }
    }
}

/// Normalize a matched color token to 6-digit lowercase hex.
///
/// 3-digit hex expands by duplicating each digit, 6-digit hex lowercases,
/// `rgb(...)`/`rgba(...)` converts each 0–255 channel to two hex digits.
/// `hsl(...)` has no conversion and yields `None`. Idempotent on already
/// normalized values.
pub fn normalize_color(token: &str) -> Option<String> {
    if let Some(digits) = token.strip_prefix('#') {
        let hex = digits.to_ascii_lowercase();
        if hex.len() == 3 {
            let mut expanded = String::with_capacity(7);
            expanded.push('#');
            for ch in hex.chars() {
                expanded.push(ch);
                expanded.push(ch);
            }
            return Some(expanded);
        }
        return Some(format!("#{hex}"));
    }

    if token.starts_with("rgb") {
        let channels: Option<Vec<u8>> = RGB_CHANNEL
            .find_iter(token)
            .take(3)
            .map(|m| m.as_str().parse().ok())
            .collect();
        let channels = channels?;
        if channels.len() < 3 {
            return None;
        }
        return Some(format!(
            "#{:02x}{:02x}{:02x}",
            channels[0], channels[1], channels[2]
        ));
    }

    None
}

/// True when all channels of a well-formed 6-digit hex color sit within
/// [`GRAYSCALE_SPREAD`] of each other. Malformed input is not grayscale.
pub fn is_grayscale(hex: &str) -> bool {
    let Some(digits) = hex.strip_prefix('#') else {
        return false;
    };
    if digits.len() != 6 {
        return false;
    }
    let (Ok(r), Ok(g), Ok(b)) = (
        u8::from_str_radix(&digits[0..2], 16),
        u8::from_str_radix(&digits[2..4], 16),
        u8::from_str_radix(&digits[4..6], 16),
    ) else {
        return false;
    };
    r.max(g).max(b) - r.min(g).min(b) < GRAYSCALE_SPREAD
}
