//! DOCX format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// File extension accepted for uploads.
pub const DOCX_EXTENSION: &str = "docx";

/// Detect a DOCX (ZIP) container from a file path.
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// detect_format_from_path("report.docx").unwrap();
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    detect_format_from_bytes(&header)
}

/// Detect a DOCX (ZIP) container from its leading bytes.
///
/// Only the container signature is checked here; a ZIP without
/// `word/document.xml` is rejected later by the parser.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if data.starts_with(ZIP_MAGIC) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if bytes start with a ZIP container signature.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Check if a file name carries the `.docx` extension (case-insensitive).
pub fn has_docx_extension(name: &str) -> bool {
    let suffix = format!(".{}", DOCX_EXTENSION);
    name.to_lowercase().ends_with(&suffix)
}

/// Validate an uploaded file name.
///
/// Returns [`Error::MissingFile`] for an empty name and
/// [`Error::UnsupportedExtension`] for anything but `.docx`.
pub fn validate_upload_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::MissingFile);
    }
    if !has_docx_extension(name) {
        return Err(Error::UnsupportedExtension(name.to_string()));
    }
    Ok(())
}
