//! Rendering module for converting documents to sectioned HTML.
//!
//! The pipeline is: [`RunRenderer`] per run, [`ParagraphRenderer`] per
//! paragraph (with [`classify`] deciding list membership), a
//! [`ListAccumulator`] grouping consecutive list items, and the
//! [`SectionSplitter`] routing output into head, text and FAQ sections.

mod faq;
mod json;
mod list;
mod options;
mod paragraph;
mod result;
mod run;
mod sections;

pub use faq::{pair_faq, FaqItem, FaqKind};
pub use json::{to_json, JsonFormat};
pub use list::{classify, ListAccumulator, ListKind, BULLET_GLYPHS};
pub use options::{HtmlOptions, DEFAULT_SECTION_MARKER};
pub use paragraph::{ParagraphRenderer, RenderedParagraph};
pub use result::{ConversionStats, FaqPair, SectionedHtml};
pub use run::{escape_html, inline_style, RunRenderer};
pub use sections::{split_sections, Section, SectionSplitter};

use crate::error::Result;
use crate::model::Document;

/// Convert a document to head, text and FAQ sections.
///
/// Hyperlinks are resolved against the document's own relationships.
pub fn to_sections(doc: &Document, options: &HtmlOptions) -> Result<SectionedHtml> {
    let (result, _) = to_sections_with_stats(doc, options)?;
    Ok(result)
}

/// Convert a document to sections and report conversion statistics.
pub fn to_sections_with_stats(
    doc: &Document,
    options: &HtmlOptions,
) -> Result<(SectionedHtml, ConversionStats)> {
    let (result, stats) = split_sections(&doc.paragraphs, doc, options);
    log::debug!(
        "Converted {} paragraphs: {} list items, {} FAQ pairs",
        stats.paragraph_count,
        stats.list_item_count,
        stats.faq_pair_count
    );
    Ok((result, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Run};

    #[test]
    fn test_to_sections_resolves_document_links() {
        let mut doc = Document::new();
        doc.add_hyperlink("rId4", "https://example.com/docs");
        doc.add_paragraph(Paragraph::with_runs([
            Run::new("See "),
            Run::new("docs").with_hyperlink("rId4"),
        ]));

        let result = to_sections(&doc, &HtmlOptions::default()).unwrap();
        assert_eq!(
            result.head,
            "<p><span style=\"font-weight:normal;\">See </span>\
             <a href=\"https://example.com/docs\" target=\"_blank\">docs</a></p>"
        );
    }

    #[test]
    fn test_to_sections_empty_document() {
        let result = to_sections(&Document::new(), &HtmlOptions::default()).unwrap();
        assert!(result.is_empty());
    }
}
