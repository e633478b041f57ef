//! Document converter module.
//!
//! This module ties the DOCX reader to the section renderer and adds the
//! file-level concerns around it: extension validation for uploads,
//! statistics collection and parallel batch conversion.
//!
//! # Example
//!
//! ```no_run
//! use undocx::convert::{ConvertOptions, DocumentConverter, DocxConverter};
//! use std::path::Path;
//!
//! fn main() -> undocx::Result<()> {
//!     let converter = DocxConverter::new();
//!     let result = converter.convert(Path::new("faq.docx"), &ConvertOptions::default())?;
//!     println!("{}", result.sections.head);
//!     Ok(())
//! }
//! ```

mod docx;

pub use docx::DocxConverter;

use crate::error::Result;
use crate::model::Metadata;
use crate::parser::ErrorMode;
use crate::render::{to_json, ConversionStats, HtmlOptions, JsonFormat, SectionedHtml};
use std::path::Path;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub html: HtmlOptions,

    /// Error handling for auxiliary package parts
    pub error_mode: ErrorMode,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html = options;
        self
    }

    /// Skip unreadable styles and relationships instead of failing.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Head, text and FAQ sections
    pub sections: SectionedHtml,

    /// Source document metadata
    pub metadata: Metadata,

    /// Conversion statistics (if collected)
    pub stats: Option<ConversionStats>,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(sections: SectionedHtml, metadata: Metadata) -> Self {
        Self {
            sections,
            metadata,
            stats: None,
        }
    }

    /// Set conversion statistics.
    pub fn with_stats(mut self, stats: ConversionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Serialize the sections as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.sections, format)
    }
}

/// Trait for document converters.
///
/// Implement this trait to plug another document-model provider in front
/// of the section renderer.
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .lenient()
            .with_stats(true)
            .with_html_options(HtmlOptions::new().with_section_marker("***"));

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.collect_stats);
        assert_eq!(options.html.section_marker, "***");
    }

    #[test]
    fn test_convert_result_json() {
        let result = ConvertResult::new(SectionedHtml::default(), Metadata::default());
        assert!(result.stats.is_none());
        assert_eq!(
            result.to_json(JsonFormat::Compact).unwrap(),
            r#"{"head":"","text":"","faq":[]}"#
        );
    }
}
