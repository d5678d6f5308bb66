//! Run timestamp and artifact file naming.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};

/// `strftime` pattern shared by file names and the CSV timestamp remark.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp computed once per run so both artifact names correlate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTimestamp(String);

impl RunTimestamp {
    /// Capture the current local time.
    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }

    pub fn from_local(time: &DateTime<Local>) -> Self {
        Self(time.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn from_naive(time: &NaiveDateTime) -> Self {
        Self(time.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two files produced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    /// HMI alarm message import workbook.
    Spreadsheet,
    /// Logix tag comment import file.
    Csv,
}

impl ArtifactKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Spreadsheet => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spreadsheet => "excel",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `{shortcut}_{timestamp}.{ext}`
pub fn artifact_file_name(shortcut: &str, timestamp: &RunTimestamp, kind: ArtifactKind) -> String {
    format!("{shortcut}_{timestamp}.{}", kind.extension())
}
