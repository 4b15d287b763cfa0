//! Typed error definitions for rcopy.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RcopyError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Destination directory not found: {0}")]
    DestinationNotFound(PathBuf),

    #[error("{role} is not a directory: {path}")]
    NotADirectory { role: &'static str, path: PathBuf },

    #[error("Cannot read source directory {path}: {context}")]
    SourceUnreadable { path: PathBuf, context: String },

    #[error("Source and destination resolve to the same directory: {0}")]
    SameDirectory(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl RcopyError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            RcopyError::SourceNotFound(_) => 10,
            RcopyError::DestinationNotFound(_) => 11,
            RcopyError::NotADirectory { .. } => 12,
            RcopyError::SourceUnreadable { .. } => 13,
            RcopyError::SameDirectory(_) => 14,
            RcopyError::InvalidPattern { .. } => 20,
            RcopyError::Interrupted => 130,
        }
    }

    /// Short machine-friendly kind used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RcopyError::SourceNotFound(_) => "source_not_found",
            RcopyError::DestinationNotFound(_) => "destination_not_found",
            RcopyError::NotADirectory { .. } => "not_a_directory",
            RcopyError::SourceUnreadable { .. } => "source_unreadable",
            RcopyError::SameDirectory(_) => "same_directory",
            RcopyError::InvalidPattern { .. } => "invalid_pattern",
            RcopyError::Interrupted => "interrupted",
        }
    }
}
