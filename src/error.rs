//! Unified error types for dirmap
//!
//! Provides a consistent error handling approach across all modules.

use std::io;
use std::path::PathBuf;

/// Unified error type for dirmap operations
#[derive(Debug, thiserror::Error)]
pub enum DirmapError {
    /// Listing a directory's entries failed
    #[error("failed to read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    /// Probing an entry's file type failed
    #[error("failed to stat {path}: {source}")]
    Metadata { path: PathBuf, source: io::Error },

    /// I/O errors (stdout writes, CWD lookup, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type using DirmapError
pub type Result<T> = std::result::Result<T, DirmapError>;

impl DirmapError {
    /// Create a ReadDir error
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create a Metadata error
    pub fn metadata(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }
}
