//! Error types for the library layer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Errors that can occur while managing or persisting a collection
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Failed to read a catalog file
    #[error("failed to read catalog file at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Failed to write a catalog file
    #[error("failed to write catalog file at {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Catalog file content is not a valid book list
    #[error("catalog file at {path} is not a valid book list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize the collection
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Catalog file was written with an incompatible format version
    #[error("unsupported catalog format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A library with this identifier is already registered
    #[error("library already exists: {0}")]
    LibraryExists(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LibraryError {
    /// Returns true when the file content, not the file system, was at
    /// fault
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnsupportedVersion { .. })
    }
}
