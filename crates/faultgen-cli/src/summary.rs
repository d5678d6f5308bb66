use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use faultgen_cli::pipeline::{ArtifactOutcome, GenerateResult};

pub fn print_summary(result: &GenerateResult) {
    println!("Timestamp: {}", result.timestamp);
    println!("Triggers: {}", result.trigger_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Rows"),
        header_cell("Status"),
        header_cell("Path"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for artifact in &result.artifacts {
        table.add_row(vec![
            Cell::new(artifact.kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(result.row_count),
            status_cell(artifact),
            Cell::new(artifact.path.display()),
        ]);
    }
    println!("{table}");

    let failures: Vec<&ArtifactOutcome> = result
        .artifacts
        .iter()
        .filter(|artifact| !artifact.is_written())
        .collect();
    if failures.is_empty() {
        println!("completed. exiting...");
    } else {
        eprintln!("Errors:");
        for artifact in failures {
            if let Some(error) = &artifact.error {
                eprintln!("- failed to create {} file: {error}", artifact.kind);
            }
        }
    }
}

fn status_cell(artifact: &ArtifactOutcome) -> Cell {
    if artifact.is_written() {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
