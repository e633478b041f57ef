//! DOCX document converter implementation.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::validate_upload_name;
use crate::error::Result;
use crate::model::Document;
use crate::parser::{DocxParser, ParseOptions};
use crate::render::to_sections_with_stats;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// DOCX document converter.
///
/// Converts DOCX packages to head, text and FAQ sections.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    _private: (),
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn build_parse_options(&self, options: &ConvertOptions) -> ParseOptions {
        ParseOptions::new().with_error_mode(options.error_mode)
    }

    /// Convert an already parsed document.
    pub fn convert_document(
        &self,
        doc: &Document,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let (sections, stats) = to_sections_with_stats(doc, &options.html)?;
        let result = ConvertResult::new(sections, doc.metadata.clone());

        if options.collect_stats {
            Ok(result.with_stats(stats))
        } else {
            Ok(result)
        }
    }

    /// Convert an uploaded file.
    ///
    /// The file name must end in `.docx`; the bytes are never written to disk.
    pub fn convert_upload(
        &self,
        filename: &str,
        bytes: &[u8],
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        validate_upload_name(filename)?;

        let parse_opts = self.build_parse_options(options).with_source(filename);
        let doc = DocxParser::from_bytes_with_options(bytes, parse_opts)?.parse()?;
        self.convert_document(&doc, options)
    }

    /// Convert many files in parallel.
    ///
    /// Each file is converted independently; results keep the input order.
    pub fn convert_files<P>(
        &self,
        paths: &[P],
        options: &ConvertOptions,
    ) -> Vec<(PathBuf, Result<ConvertResult>)>
    where
        P: AsRef<Path> + Sync,
    {
        self.convert_files_with_progress(paths, options, |_, _| {})
    }

    /// Convert many files in parallel, calling `on_done` as each one finishes.
    ///
    /// `on_done` runs on the worker thread, in completion order.
    pub fn convert_files_with_progress<P, F>(
        &self,
        paths: &[P],
        options: &ConvertOptions,
        on_done: F,
    ) -> Vec<(PathBuf, Result<ConvertResult>)>
    where
        P: AsRef<Path> + Sync,
        F: Fn(&Path, &Result<ConvertResult>) + Sync,
    {
        paths
            .par_iter()
            .map(|path| {
                let path = path.as_ref();
                let result = self.convert(path, options);
                if let Err(ref e) = result {
                    log::warn!("Failed to convert {}: {}", path.display(), e);
                }
                on_done(path, &result);
                (path.to_path_buf(), result)
            })
            .collect()
    }
}

impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let parse_opts = self.build_parse_options(options);
        let doc = DocxParser::open_with_options(path, parse_opts)?.parse()?;
        self.convert_document(&doc, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parse_opts = self.build_parse_options(options);
        let doc = DocxParser::from_bytes_with_options(bytes, parse_opts)?.parse()?;
        self.convert_document(&doc, options)
    }
}
