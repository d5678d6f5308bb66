//! Output generation for fault messages.
//!
//! This crate renders one expanded row sequence into two independent files:
//!
//! - **Alarm workbook** (XLSX): FactoryTalk View Studio alarm message import
//! - **Comment import** (CSV): Logix tag comment import/export file
//!
//! The writers share no state, so a failure in one leaves the other free to
//! run.

mod alarm_sheet;
mod comment_csv;
mod common;
mod error;

pub use alarm_sheet::{
    MESSAGE_HEADERS, SheetCell, SheetValue, TRIGGERS_HEADER, build_alarm_sheet,
    write_alarm_workbook,
};
pub use comment_csv::{
    CSV_HEADERS, CsvOptions, default_attribution, write_comment_csv, write_comment_records,
};
pub use common::ensure_parent_dir;
pub use error::{OutputError, Result};
