//! Conversion result and statistics.

use serde::{Deserialize, Serialize};

/// A document split into head, body text and FAQ pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionedHtml {
    /// HTML before the first section marker
    pub head: String,

    /// HTML between the first and second section markers, lists included
    pub text: String,

    /// Question/answer pairs after the second section marker
    pub faq: Vec<FaqPair>,
}

impl SectionedHtml {
    /// Check if all three sections are empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.text.is_empty() && self.faq.is_empty()
    }
}

/// One FAQ entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPair {
    /// Question HTML
    pub question: String,

    /// Answer HTML, empty when the question had no answer
    pub answer: String,
}

impl FaqPair {
    /// Create a new pair.
    pub fn new(question: String, answer: String) -> Self {
        Self { question, answer }
    }
}

/// Statistics collected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Paragraphs in the source document
    pub paragraph_count: u32,

    /// Paragraphs that produced no output
    pub skipped_count: u32,

    /// Section markers encountered
    pub marker_count: u32,

    /// List items rendered
    pub list_item_count: u32,

    /// `<ul>`/`<ol>` containers emitted
    pub list_count: u32,

    /// FAQ paragraphs tagged as questions
    pub question_count: u32,

    /// FAQ paragraphs tagged as answers
    pub answer_count: u32,

    /// FAQ pairs produced
    pub faq_pair_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.paragraph_count += other.paragraph_count;
        self.skipped_count += other.skipped_count;
        self.marker_count += other.marker_count;
        self.list_item_count += other.list_item_count;
        self.list_count += other.list_count;
        self.question_count += other.question_count;
        self.answer_count += other.answer_count;
        self.faq_pair_count += other.faq_pair_count;
    }
}
