//! Error types shared across phpforge crates.
//!
//! [`ForgeError`] covers the failures that are not provider-specific:
//! configuration problems, export I/O and archiving, and JSON handling.

use thiserror::Error;

/// Top-level error type for phpforge.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ForgeError {
    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A generated file path would escape the export directory.
    #[error("invalid file path: {path}")]
    InvalidPath {
        /// The offending path as produced by the provider.
        path: String,
    },

    /// Export was requested with nothing to write.
    #[error("No files to export. Generate a project first.")]
    NothingToExport,

    /// Building an export archive failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ForgeError>;
