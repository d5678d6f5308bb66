//! Integration tests for the workbook and comment file writers.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;

use faultgen_core::{RunTimestamp, TemplateGenerator, Trigger, expand_rows, parse_trigger_lines};
use faultgen_output::{CsvOptions, OutputError, write_alarm_workbook, write_comment_csv};

fn triggers() -> Vec<Trigger> {
    parse_trigger_lines(
        "Program:Main.Faults.MotorOverload\n\nFaults.Conveyor\nProgram:Aux.Alarms.Pump\n",
    )
}

fn timestamp() -> RunTimestamp {
    let time = NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(9, 5, 1)
        .unwrap();
    RunTimestamp::from_naive(&time)
}

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut contents = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    contents
}

#[test]
fn workbook_has_trigger_list_and_message_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("PLC1_20240307_090501.xlsx");
    let triggers = triggers();
    let rows = expand_rows(&triggers, &TemplateGenerator::new("PLC1"));

    write_alarm_workbook(&path, &rows).unwrap();

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    // Header + 3 triggers + message header + 96 messages; gap rows are absent.
    assert_eq!(sheet.matches("<row ").count(), 1 + 3 + 1 + 96);
    assert!(sheet.contains(r#"<dimension ref="A1:J103"/>"#));
    assert!(sheet.contains(r#"<row r="7""#));
    assert!(!sheet.contains(r#"<row r="5""#));
    assert!(sheet.contains(r#"<c r="J103"><v>16777215</v></c>"#));
    assert!(sheet.contains(r#"<c r="B103"><v>32</v></c>"#));

    let strings = read_part(&path, "xl/sharedStrings.xml");
    assert!(strings.contains("<t>FORGROUND</t>"));
    assert!(strings.contains("<t>{::[PLC1]Program:Main.Faults.MotorOverload}</t>"));
    assert!(
        strings.contains("<t>/*S:0 {::[PLC1]Program:Aux.Alarms.Pump.31.@Description*/</t>")
    );
}

#[test]
fn workbook_escapes_control_characters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("PLC1_20240307_090501.xlsx");
    let triggers = parse_trigger_lines("Faults.A\u{1}B\n");
    let rows = expand_rows(&triggers, &TemplateGenerator::new("P"));

    write_alarm_workbook(&path, &rows).unwrap();

    let strings = read_part(&path, "xl/sharedStrings.xml");
    assert!(!strings.contains('\u{1}'));
    assert!(strings.contains("<t>{::[P]Faults.A_x0001_B}</t>"));
}

#[test]
fn comment_file_has_32_records_per_trigger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/PLC1_20240307_090501.csv");
    let triggers = triggers();
    let rows = expand_rows(&triggers, &TemplateGenerator::new("PLC1"));

    write_comment_csv(&path, &rows, &CsvOptions::new(timestamp(), "0.3")).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5 + 96);
    assert!(lines[..3].iter().all(|line| line.starts_with("remark,")));
    assert_eq!(lines[3], "0.3");
    assert!(lines[5..].iter().all(|line| line.starts_with("COMMENT,")));
    assert_eq!(
        lines[5 + 32 + 3],
        "COMMENT,,Faults,- SPARE - Conveyor.3,,Faults.Conveyor.3"
    );
    assert_eq!(
        lines[5 + 64 + 9],
        "COMMENT,Aux,Faults,- SPARE - Aux .9,,Faults..9"
    );
}

#[test]
fn rerun_differs_only_in_timestamp_remark() {
    let dir = TempDir::new().unwrap();
    let triggers = triggers();
    let rows = expand_rows(&triggers, &TemplateGenerator::new("PLC1"));
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let later = RunTimestamp::from_naive(
        &NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap(),
    );

    write_comment_csv(&first, &rows, &CsvOptions::new(timestamp(), "0.3")).unwrap();
    write_comment_csv(&second, &rows, &CsvOptions::new(later, "0.3")).unwrap();

    let first = fs::read_to_string(first).unwrap();
    let second = fs::read_to_string(second).unwrap();
    let differing: Vec<usize> = first
        .lines()
        .zip(second.lines())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(differing, vec![1]);
}

#[test]
fn writer_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("occupied.xlsx");
    fs::create_dir(&path).unwrap();

    let result = write_alarm_workbook(&path, &[]);
    assert!(matches!(result, Err(OutputError::Create { .. })));
}
