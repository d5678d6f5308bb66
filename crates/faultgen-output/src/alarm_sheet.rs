//! FactoryTalk View alarm message import sheet.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use tracing::{debug, info};

use faultgen_core::FaultBitRow;

use crate::common::create_output_file;
use crate::error::Result;

/// Label above the trigger list.
pub const TRIGGERS_HEADER: &str = "TRIGGERS";

/// Message table columns, spelled as the import tool expects them.
pub const MESSAGE_HEADERS: [&str; 10] = [
    "TRIGGER",
    "TRIGGER VALUE",
    "MESSAGE",
    "-",
    "DISPLAY",
    "AUDIO",
    "PRINT",
    "MESSAGE TO TAG",
    "BACKGROUND",
    "FORGROUND",
];

/// Blank rows between the trigger list and the message table.
const SECTION_GAP_ROWS: RowNum = 2;

/// First column holding a fixed flag value (the `-` column).
const FLAG_COLUMN_START: ColNum = 3;

/// Value of one laid-out cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// One positioned cell of the alarm sheet (zero-based row and column).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetCell<'a> {
    pub row: RowNum,
    pub col: ColNum,
    pub value: SheetValue<'a>,
    pub bold: bool,
}

impl<'a> SheetCell<'a> {
    fn text(row: RowNum, col: ColNum, value: &'a str) -> Self {
        Self {
            row,
            col,
            value: SheetValue::Text(value),
            bold: false,
        }
    }

    fn header(row: RowNum, col: ColNum, value: &'a str) -> Self {
        Self {
            bold: true,
            ..Self::text(row, col, value)
        }
    }

    fn number(row: RowNum, col: ColNum, value: impl Into<f64>) -> Self {
        Self {
            row,
            col,
            value: SheetValue::Number(value.into()),
            bold: false,
        }
    }
}

/// Lay out the trigger list followed by one message row per fault bit.
///
/// Cells come out in row-major order.
pub fn build_alarm_sheet<'a>(rows: &'a [FaultBitRow<'_>]) -> Vec<SheetCell<'a>> {
    let mut cells = vec![SheetCell::header(0, 0, TRIGGERS_HEADER)];

    let mut row: RowNum = 1;
    for first in rows.iter().filter(|fault| fault.is_first_bit()) {
        cells.push(SheetCell::text(row, 0, &first.trigger_ref));
        row += 1;
    }

    row += SECTION_GAP_ROWS;
    for (col, title) in (0..).zip(MESSAGE_HEADERS) {
        cells.push(SheetCell::header(row, col, title));
    }
    row += 1;

    for fault in rows {
        cells.push(SheetCell::text(row, 0, &fault.trigger_ref));
        cells.push(SheetCell::number(row, 1, fault.trigger_value()));
        cells.push(SheetCell::text(row, 2, &fault.fault_message));
        for (col, value) in (FLAG_COLUMN_START..).zip(fault.flags.as_columns()) {
            cells.push(SheetCell::number(row, col, value));
        }
        row += 1;
    }
    cells
}

/// Write the alarm import workbook for `rows` to `path`.
pub fn write_alarm_workbook(path: &Path, rows: &[FaultBitRow<'_>]) -> Result<()> {
    let cells = build_alarm_sheet(rows);
    debug!(
        rows = rows.len(),
        last_row = cells.last().map(|cell| cell.row).unwrap_or_default(),
        "alarm sheet laid out"
    );

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    for cell in cells {
        match cell.value {
            SheetValue::Text(text) if cell.bold => {
                worksheet.write_string_with_format(cell.row, cell.col, text, &bold)?
            }
            SheetValue::Text(text) => worksheet.write_string(cell.row, cell.col, text)?,
            SheetValue::Number(value) => worksheet.write_number(cell.row, cell.col, value)?,
        };
    }

    let mut file = create_output_file(path)?;
    workbook.save_to_writer(&mut file)?;
    file.flush()?;
    info!(path = %path.display(), "alarm workbook written");
    Ok(())
}
