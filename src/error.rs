//! Error types for form loading, generation and export

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// Errors raised while turning form state into a script block
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Strict policy only: the form has missing or malformed fields
    #[error("Form failed validation:\n{0}")]
    Invalid(ValidationReport),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialized schema is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors raised while reading a form file
#[derive(Debug, Error)]
pub enum FormLoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported form file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Errors raised by a clipboard exporter
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nothing to export: no preview has been rendered yet")]
    NothingRendered,
}

pub type GenerateResult<T> = Result<T, GenerateError>;
