//! Shared helpers for output writers.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::error::{OutputError, Result};

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Create (or truncate) an output file behind a buffered writer.
pub(crate) fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
