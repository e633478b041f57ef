//! Document model types for word-processing content.
//!
//! This module defines the intermediate representation that bridges DOCX
//! reading and HTML rendering. Any document-model provider can build it
//! directly; the bundled reader lives in [`crate::parser`].

mod document;
mod paragraph;

pub use document::{Document, HyperlinkResolver, Metadata};
pub use paragraph::{Numbering, Paragraph, RgbColor, Run};
