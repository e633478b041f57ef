//! List detection and grouping.

use serde::{Deserialize, Serialize};

use crate::model::Paragraph;

/// Leading characters that mark a paragraph as a bulleted item.
pub const BULLET_GLYPHS: &[char] = &['•', '-', '‣', '◦', '▪'];

/// Kind of HTML list a paragraph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted list (`<ul>`)
    Unordered,
    /// Numbered list (`<ol>`)
    Ordered,
}

impl ListKind {
    /// HTML container tag name.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Classify a paragraph as a list item.
///
/// Checks run in a fixed order and the first match wins:
/// leading bullet glyph, style name, then numbering level. Only
/// top-level numbered paragraphs count as ordered items; deeper
/// numbering levels are treated as bullets.
pub fn classify(para: &Paragraph) -> Option<ListKind> {
    let text = para.plain_text();
    if let Some(first) = text.trim().chars().next() {
        if BULLET_GLYPHS.contains(&first) {
            return Some(ListKind::Unordered);
        }
    }

    let style = para.style_name.to_lowercase();
    if style.contains("bullet") {
        return Some(ListKind::Unordered);
    }
    if style.contains("number") {
        return Some(ListKind::Ordered);
    }

    match para.numbering {
        Some(numbering) if numbering.level == 0 => Some(ListKind::Ordered),
        Some(_) => Some(ListKind::Unordered),
        None => None,
    }
}

/// Buffers consecutive list items of one kind.
///
/// Items are emitted as a single `<ul>` or `<ol>` when the kind changes or
/// when the owner calls [`ListAccumulator::flush`].
#[derive(Debug, Default)]
pub struct ListAccumulator {
    items: Vec<String>,
    kind: Option<ListKind>,
    emitted: u32,
}

impl ListAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, flushing into `out` first if the kind changes.
    pub fn accumulate(&mut self, item: String, kind: ListKind, out: &mut String) {
        if !self.items.is_empty() && self.kind != Some(kind) {
            self.flush(out);
        }
        self.kind = Some(kind);
        self.items.push(item);
    }

    /// Append the buffered items to `out` and reset.
    pub fn flush(&mut self, out: &mut String) {
        if self.items.is_empty() {
            self.kind = None;
            return;
        }

        let items = self.items.concat();
        match self.kind.take() {
            Some(kind) => {
                let tag = kind.tag();
                out.push_str(&format!("<{}>{}</{}>", tag, items, tag));
            }
            None => out.push_str(&items),
        }
        self.items.clear();
        self.emitted += 1;
    }

    /// Number of flushes that produced output so far.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Number of buffered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kind of the buffered items.
    pub fn kind(&self) -> Option<ListKind> {
        self.kind
    }
}
