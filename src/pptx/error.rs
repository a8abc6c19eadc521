//! Error types for PPTX processing.

use thiserror::Error;

/// Errors that can occur during PPTX reading or writing.
#[derive(Error, Debug)]
pub enum PptxError {
    /// XML parsing or generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// A required package part is missing from the archive
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Malformed or unexpected document content
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for PptxError {
    fn from(err: quick_xml::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for PptxError {
    fn from(err: zip::result::ZipError) -> Self {
        PptxError::Zip(err.to_string())
    }
}

/// Result type for PPTX operations.
pub type Result<T> = std::result::Result<T, PptxError>;
