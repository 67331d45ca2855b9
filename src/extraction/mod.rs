//! Signal extractors
//!
//! Four independent, order-insensitive analyzers over one shared parsed
//! document: logo, colors, fonts, and page metadata. Each degrades to
//! empty/default values instead of failing, so nothing past the parser can
//! error. [`ExtractedBranding`] is the straight aggregation of their
//! outputs.

pub mod colors;
pub mod fonts;
pub mod logo;
pub mod metadata;

pub use colors::{BrandColors, ColorExtractor};
pub use fonts::{BrandFonts, FontExtractor};
pub use logo::LogoExtractor;
pub use metadata::{MetadataExtractor, PageMetadata};

use serde::{Deserialize, Serialize};

/// The assembled branding result returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedBranding {
    /// Absolute logo URL, when one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Color palette
    pub colors: BrandColors,
    /// Heading/body font pair
    pub fonts: BrandFonts,
    /// Title, description, favicon
    pub metadata: PageMetadata,
}

impl ExtractedBranding {
    /// Combine the four extractor outputs. Pure aggregation: no further
    /// inference, validation, or cross-field logic happens here.
    pub fn assemble(
        logo: Option<String>,
        colors: BrandColors,
        fonts: BrandFonts,
        metadata: PageMetadata,
    ) -> Self {
        Self {
            logo,
            colors,
            fonts,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_is_pass_through() {
        let branding = ExtractedBranding::assemble(
            Some("https://test.com/logo.png".to_string()),
            BrandColors::default(),
            BrandFonts::default(),
            PageMetadata::default(),
        );
        assert_eq!(branding.logo.as_deref(), Some("https://test.com/logo.png"));
        assert_eq!(branding.colors.background, "#ffffff");
        assert_eq!(branding.fonts.heading, "Inter");
        assert!(branding.metadata.title.is_none());
    }

    #[test]
    fn test_serialization_shape() {
        let branding = ExtractedBranding::assemble(
            None,
            BrandColors::default(),
            BrandFonts::default(),
            PageMetadata::default(),
        );
        let json = serde_json::to_string(&branding).unwrap();
        assert!(json.contains("\"background\":\"#ffffff\""));
        assert!(json.contains("\"text\":\"#1a1a1a\""));
        assert!(json.contains("\"heading\":\"Inter\""));
        // Absent optionals are skipped entirely
        assert!(!json.contains("\"logo\""));
        assert!(!json.contains("\"primary\""));
    }

    #[test]
    fn test_round_trip() {
        let branding = ExtractedBranding::assemble(
            Some("https://test.com/logo.png".to_string()),
            BrandColors {
                primary: Some("#ff5733".to_string()),
                ..BrandColors::default()
            },
            BrandFonts::default(),
            PageMetadata {
                title: Some("Test".to_string()),
                ..PageMetadata::default()
            },
        );
        let json = serde_json::to_string(&branding).unwrap();
        let parsed: ExtractedBranding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.logo, branding.logo);
        assert_eq!(parsed.colors.primary, branding.colors.primary);
        assert_eq!(parsed.metadata.title, branding.metadata.title);
    }
}
