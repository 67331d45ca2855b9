//! Brandkit - heuristic brand extraction from company websites
//!
//! Given a URL, this crate fetches the page and derives a small structured
//! "brand" (logo URL, color palette, font pair, and page metadata) that a
//! project-creation workflow merges into a project record. Extraction is
//! best-effort over untrusted, often malformed HTML: simple explainable
//! signals, not a browser rendering pipeline.
//!
//! # Architecture
//!
//! ```text
//! URL ──▶ Validator ──▶ Fetcher ──▶ Parser ──┬─▶ Logo Extractor ─────┐
//!                                            ├─▶ Color Extractor ────┤
//!                                            ├─▶ Font Extractor ─────┼─▶ Assembler ─▶ ExtractedBranding
//!                                            └─▶ Metadata Extractor ─┘
//! ```
//!
//! Any failure before the assembler short-circuits the pipeline; once
//! parsing succeeds, the extractors degrade to defaults instead of failing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use brandkit::extract_branding;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let branding = extract_branding("https://example.com").await?;
//!
//!     println!("logo: {:?}", branding.logo);
//!     println!("primary color: {:?}", branding.colors.primary);
//!     println!("heading font: {}", branding.fonts.heading);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod extraction;
pub mod fetch;
pub mod pipeline;
pub mod url;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extraction::{BrandColors, BrandFonts, ExtractedBranding, PageMetadata};
pub use pipeline::extract_branding;
pub use url::ValidatedUrl;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
