//! FAQ question/answer pairing.

use serde::{Deserialize, Serialize};

use super::FaqPair;

/// Role of a paragraph in the FAQ section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqKind {
    /// Bold paragraph opening a new entry
    Question,
    /// Paragraph answering the pending question
    Answer,
}

/// A rendered FAQ paragraph tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Role of the paragraph
    pub kind: FaqKind,
    /// Rendered paragraph HTML
    pub html: String,
}

impl FaqItem {
    /// Create a question item.
    pub fn question(html: impl Into<String>) -> Self {
        Self {
            kind: FaqKind::Question,
            html: html.into(),
        }
    }

    /// Create an answer item.
    pub fn answer(html: impl Into<String>) -> Self {
        Self {
            kind: FaqKind::Answer,
            html: html.into(),
        }
    }
}

/// Pair tagged FAQ items in order.
///
/// A question followed by another question gets an empty answer, and an
/// answer with no pending question is dropped.
pub fn pair_faq(items: impl IntoIterator<Item = FaqItem>) -> Vec<FaqPair> {
    let mut pairs = Vec::new();
    let mut pending: Option<String> = None;

    for item in items {
        match item.kind {
            FaqKind::Question => {
                if let Some(question) = pending.take() {
                    pairs.push(FaqPair::new(question, String::new()));
                }
                pending = Some(item.html);
            }
            FaqKind::Answer => match pending.take() {
                Some(question) => pairs.push(FaqPair::new(question, item.html)),
                None => log::debug!("Dropping FAQ answer without a question"),
            },
        }
    }

    if let Some(question) = pending {
        pairs.push(FaqPair::new(question, String::new()));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(q: &str, a: &str) -> FaqPair {
        FaqPair::new(q.to_string(), a.to_string())
    }

    #[test]
    fn test_orphan_question_gets_empty_answer() {
        let items = vec![
            FaqItem::question("Q1"),
            FaqItem::answer("A1"),
            FaqItem::question("Q2"),
            FaqItem::question("Q3"),
            FaqItem::answer("A3"),
        ];
        assert_eq!(
            pair_faq(items),
            vec![pair("Q1", "A1"), pair("Q2", ""), pair("Q3", "A3")]
        );
    }

    #[test]
    fn test_leading_answer_is_dropped() {
        let items = vec![
            FaqItem::answer("A0"),
            FaqItem::question("Q1"),
            FaqItem::answer("A1"),
        ];
        assert_eq!(pair_faq(items), vec![pair("Q1", "A1")]);
    }

    #[test]
    fn test_second_answer_is_dropped() {
        let items = vec![
            FaqItem::question("Q1"),
            FaqItem::answer("A1"),
            FaqItem::answer("A1b"),
        ];
        assert_eq!(pair_faq(items), vec![pair("Q1", "A1")]);
    }

    #[test]
    fn test_trailing_question() {
        let items = vec![FaqItem::question("Q1")];
        assert_eq!(pair_faq(items), vec![pair("Q1", "")]);
    }

    #[test]
    fn test_empty() {
        assert!(pair_faq(Vec::new()).is_empty());
    }
}
