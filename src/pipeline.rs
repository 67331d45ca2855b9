//! The extraction pipeline
//!
//! Validator → fetcher → parser → four signal extractors → assembler, with
//! no feedback loops. Any failure before assembly short-circuits the run.
//! Validation errors pass through unchanged; everything else is wrapped
//! into the uniform extraction-failure category at this boundary.

use scraper::Html;
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::extraction::{
    ColorExtractor, ExtractedBranding, FontExtractor, LogoExtractor, MetadataExtractor,
};
use crate::fetch::fetch_page;
use crate::url::ValidatedUrl;

/// Extract branding signals from the page at `url`.
///
/// The result is a pure function of the input plus the live state of the
/// remote site: nothing is cached or retained between calls, and each call
/// parses its own document. Callers fanning out over many URLs are expected
/// to bound their own concurrency.
#[instrument]
pub async fn extract_branding(url: &str) -> Result<ExtractedBranding> {
    let validated = ValidatedUrl::parse(url)?;
    info!(base_url = validated.base_url(), "extracting branding");

    let page = fetch_page(validated).await.map_err(Error::wrap)?;

    // One stack-local parse per request; the extractors share it read-only.
    // Malformed markup degrades to a partial tree, it never fails.
    let document = Html::parse_document(&page.html);
    let base_url = page.url.base_url();

    let logo = LogoExtractor::extract(&document, base_url);
    let colors = ColorExtractor::extract(&document);
    let fonts = FontExtractor::extract(&document);
    let metadata = MetadataExtractor::extract(&document, base_url);

    debug!(
        logo = logo.as_deref().unwrap_or("-"),
        primary = colors.primary.as_deref().unwrap_or("-"),
        heading = %fonts.heading,
        "signals extracted"
    );

    Ok(ExtractedBranding::assemble(logo, colors, fonts, metadata))
}
