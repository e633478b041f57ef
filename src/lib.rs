//! # undocx
//!
//! DOCX content conversion to sectioned HTML.
//!
//! A document is split into three regions by marker paragraphs whose text
//! is exactly `#####`: a head, a body text, and an FAQ region whose bold
//! paragraphs become questions paired with the paragraph that follows.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("article.docx")?;
//!
//!     // Split into head, text and FAQ
//!     let options = render::HtmlOptions::default();
//!     let sections = render::to_sections(&doc, &options)?;
//!     println!("{}", sections.text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Inline styling**: bold, italic, font size, font family and color as inline CSS
//! - **Lists**: bullet glyphs, list styles and numbering grouped into `<ul>`/`<ol>`
//! - **Hyperlinks**: resolved through the package relationships
//! - **Raw embeds**: runs starting with `<img` or `<iframe` pass through untouched
//! - **FAQ pairing**: bold questions matched with their answers
//! - **Batch conversion**: independent documents converted in parallel with Rayon

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, DocumentConverter, DocxConverter};
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, has_docx_extension, is_docx_bytes,
};
pub use error::{Error, Result};
pub use model::{Document, HyperlinkResolver, Metadata, Numbering, Paragraph, RgbColor, Run};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{
    ConversionStats, FaqPair, HtmlOptions, JsonFormat, ListKind, Section, SectionedHtml,
};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return the document model.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("article.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Convert a DOCX file to head, text and FAQ sections.
///
/// # Example
///
/// ```no_run
/// use undocx::convert_file;
///
/// let sections = convert_file("article.docx").unwrap();
/// for pair in &sections.faq {
///     println!("{} => {}", pair.question, pair.answer);
/// }
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<SectionedHtml> {
    let doc = parse_file(path)?;
    render::to_sections(&doc, &HtmlOptions::default())
}

/// Convert DOCX bytes to head, text and FAQ sections.
pub fn convert_bytes(data: &[u8]) -> Result<SectionedHtml> {
    let doc = parse_bytes(data)?;
    render::to_sections(&doc, &HtmlOptions::default())
}

/// Convert a DOCX file to JSON.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_json, JsonFormat};
///
/// let json = to_json("article.docx", JsonFormat::Pretty).unwrap();
/// std::fs::write("article.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let sections = convert_file(path)?;
    render::to_json(&sections, format)
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::{JsonFormat, Undocx};
///
/// let json = Undocx::new()
///     .with_section_marker("#####")
///     .lenient()
///     .parse("article.docx")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    parse_options: ParseOptions,
    html_options: HtmlOptions,
}

impl Undocx {
    /// Create a new Undocx builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            html_options: HtmlOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the section marker text.
    pub fn with_section_marker(mut self, marker: impl Into<String>) -> Self {
        self.html_options = self.html_options.with_section_marker(marker);
        self
    }

    /// Set the hyperlink target attribute.
    pub fn with_link_target(mut self, target: impl Into<String>) -> Self {
        self.html_options = self.html_options.with_link_target(target);
        self
    }

    /// Emit hyperlinks without a target attribute.
    pub fn without_link_target(mut self) -> Self {
        self.html_options = self.html_options.without_link_target();
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            html_options: self.html_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            html_options: self.html_options,
        })
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
    /// HTML options to use
    html_options: HtmlOptions,
}

impl UndocxResult {
    /// Convert to head, text and FAQ sections.
    pub fn to_sections(&self) -> Result<SectionedHtml> {
        render::to_sections(&self.document, &self.html_options)
    }

    /// Convert to sections together with conversion statistics.
    pub fn to_sections_with_stats(&self) -> Result<(SectionedHtml, ConversionStats)> {
        render::to_sections_with_stats(&self.document, &self.html_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let sections = self.to_sections()?;
        render::to_json(&sections, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
