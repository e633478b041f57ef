//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A paragraph of styled text runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<Run>,

    /// Paragraph style name (e.g. "Normal", "List Bullet")
    pub style_name: String,

    /// Numbering metadata, present when the paragraph takes part in a numbering definition
    pub numbering: Option<Numbering>,
}

impl Paragraph {
    /// Create a new empty paragraph with the "Normal" style.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style_name: "Normal".to_string(),
            numbering: None,
        }
    }

    /// Create a paragraph holding a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph from a list of runs.
    pub fn with_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        let mut p = Self::new();
        p.runs.extend(runs);
        p
    }

    /// Set the paragraph style name.
    pub fn styled(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Attach numbering metadata at the given indent level.
    pub fn numbered(mut self, level: u8) -> Self {
        self.numbering = Some(Numbering { level });
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::new(text));
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Check if the paragraph has no runs at all.
    pub fn has_no_runs(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Numbering metadata attached to a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numbering {
    /// Indent level (0 = top level)
    pub level: u8,
}

/// A run of text with one formatting profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Font family name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Explicit text color
    pub color: Option<RgbColor>,

    /// Hyperlink relationship id (e.g. "rId5"), resolved against the document
    pub hyperlink: Option<String>,
}

impl Run {
    /// Create a new run with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Default::default()
        }
    }

    /// Set the font family.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set the font size in points.
    pub fn with_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Mark the run as part of a hyperlink with the given relationship id.
    pub fn with_hyperlink(mut self, rel_id: impl Into<String>) -> Self {
        self.hyperlink = Some(rel_id.into());
        self
    }

    /// Check if the run has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An explicit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Parse a six-digit hex color such as `FF0000`.
    ///
    /// Returns `None` for `auto` and for anything that is not six hex digits.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self(r, g, b))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}
