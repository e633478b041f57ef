//! DOCX parsing module.
//!
//! Reads the main document part, the style table and the document
//! relationships into the [`crate::model`] representation.

mod docx_parser;
mod options;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
