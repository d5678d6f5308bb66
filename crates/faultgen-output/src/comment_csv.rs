//! Logix tag comment import file.
//!
//! Layout:
//!
//! ```text
//! remark,CSV-Import-Export
//! remark,Timestamp = 20240307_090501
//! remark,<attribution>
//! 0.3
//! TYPE,SCOPE,NAME,DESCRIPTION,DATATYPE,SPECIFIER,ATTRIBUTES
//! COMMENT,Main,Faults,- SPARE - Main Motor.0,,Faults.Motor.0
//! ```
//!
//! Comment records carry six fields under the seven-column header; the
//! import tool reads them positionally.

use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use faultgen_core::{FaultBitRow, RunTimestamp};

use crate::common::create_output_file;
use crate::error::Result;

/// Column header record.
pub const CSV_HEADERS: [&str; 7] = [
    "TYPE",
    "SCOPE",
    "NAME",
    "DESCRIPTION",
    "DATATYPE",
    "SPECIFIER",
    "ATTRIBUTES",
];

const REMARK: &str = "remark";
const FILE_KIND_REMARK: &str = "CSV-Import-Export";
const COMMENT_TYPE: &str = "COMMENT";
const COMMENT_NAME: &str = "Faults";

/// Header values of the comment file.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Run timestamp for the `Timestamp = ...` remark.
    pub timestamp: RunTimestamp,
    /// Import/export format version, written verbatim on its own record.
    pub format_version: String,
    /// Text of the third remark record.
    pub attribution: String,
}

impl CsvOptions {
    pub fn new(timestamp: RunTimestamp, format_version: impl Into<String>) -> Self {
        Self {
            timestamp,
            format_version: format_version.into(),
            attribution: default_attribution(),
        }
    }
}

pub fn default_attribution() -> String {
    format!(
        "Automatically generated by faultgen {}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write the comment import file for `rows` to `path`.
///
/// The file is flushed and closed before this returns, on success or error.
pub fn write_comment_csv(path: &Path, rows: &[FaultBitRow<'_>], options: &CsvOptions) -> Result<()> {
    let file = create_output_file(path)?;
    write_comment_records(file, rows, options)?;
    info!(path = %path.display(), records = rows.len(), "comment import written");
    Ok(())
}

/// Write the comment import records into `writer`.
pub fn write_comment_records<W: Write>(
    writer: W,
    rows: &[FaultBitRow<'_>],
    options: &CsvOptions,
) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .delimiter(b',')
        .quote(b'|')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_writer(writer);

    let timestamp = format!("Timestamp = {}", options.timestamp);
    csv.write_record([REMARK, FILE_KIND_REMARK])?;
    csv.write_record([REMARK, timestamp.as_str()])?;
    csv.write_record([REMARK, options.attribution.as_str()])?;
    csv.write_record([options.format_version.as_str()])?;
    csv.write_record(CSV_HEADERS)?;

    for row in rows {
        let description = row.description();
        let specifier = row.specifier();
        csv.write_record([
            COMMENT_TYPE,
            row.scope(),
            COMMENT_NAME,
            description.as_str(),
            "",
            specifier.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
