//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as DOCX.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The uploaded file name does not carry the `.docx` extension.
    #[error("Only .docx allowed (got {0:?})")]
    UnsupportedExtension(String),

    /// No file was supplied.
    #[error("File missing")]
    MissingFile,

    /// Error reading the ZIP container.
    #[error("ZIP archive error: {0}")]
    Zip(String),

    /// Error parsing one of the package XML parts.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A required package part is absent.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// The document model could not be converted.
    #[error("Failed to parse: {0}")]
    Conversion(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingFile;
        assert_eq!(err.to_string(), "File missing");

        let err = Error::UnsupportedExtension("notes.txt".into());
        assert_eq!(err.to_string(), "Only .docx allowed (got \"notes.txt\")");

        let err = Error::Conversion("no body".into());
        assert_eq!(err.to_string(), "Failed to parse: no body");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::MissingPart(_)));

        let err: Error = zip::result::ZipError::InvalidArchive("bad").into();
        assert!(matches!(err, Error::UnknownFormat));
    }
}
