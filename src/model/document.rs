//! Document-level types.

use super::Paragraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolves hyperlink relationship ids to target URLs.
pub trait HyperlinkResolver {
    /// Look up the target of a relationship id, or `None` if it is unknown.
    fn resolve(&self, rel_id: &str) -> Option<String>;
}

impl HyperlinkResolver for HashMap<String, String> {
    fn resolve(&self, rel_id: &str) -> Option<String> {
        self.get(rel_id).cloned()
    }
}

/// A parsed word-processing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Body paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,

    /// Hyperlink relationships (relationship id -> target URL)
    pub hyperlinks: HashMap<String, String>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from paragraphs.
    pub fn with_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Register a hyperlink relationship.
    pub fn add_hyperlink(&mut self, rel_id: impl Into<String>, target: impl Into<String>) {
        self.hyperlinks.insert(rel_id.into(), target.into());
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HyperlinkResolver for Document {
    fn resolve(&self, rel_id: &str) -> Option<String> {
        self.hyperlinks.resolve(rel_id)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source file name, when read from disk
    pub source: Option<String>,

    /// Number of distinct paragraph styles in use
    pub style_count: usize,
}
