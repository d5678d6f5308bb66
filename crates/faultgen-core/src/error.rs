//! Error types for trigger loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading the trigger list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// Trigger file not found.
    #[error("trigger file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read or decode the trigger file.
    #[error("failed to read trigger file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for trigger loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
