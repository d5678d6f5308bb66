//! Trigger identifiers and trigger list loading.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, Result};

/// A tag path naming a 32-bit fault array, e.g. `Program:Main.Faults.Motor`.
///
/// Always non-empty and free of surrounding whitespace when produced by
/// [`parse_trigger_lines`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trigger(String);

impl Trigger {
    /// Wrap a trimmed, non-empty trigger line. Returns `None` for blank input.
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split trigger file contents into triggers, in file order.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. They are trimmed and blank
/// lines are dropped. Duplicates are kept.
pub fn parse_trigger_lines(contents: &str) -> Vec<Trigger> {
    contents
        .split(['\r', '\n'])
        .filter_map(Trigger::new)
        .collect()
}

/// Read and parse a trigger list file.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist and
/// [`LoadError::Read`] if it cannot be read or is not valid UTF-8.
pub fn load_triggers(path: &Path) -> Result<Vec<Trigger>> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let triggers = parse_trigger_lines(&contents);
    debug!(path = %path.display(), count = triggers.len(), "loaded triggers");
    Ok(triggers)
}
