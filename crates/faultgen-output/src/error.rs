//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an output file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// Output file or its directory could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook could not be assembled or saved.
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV record could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
