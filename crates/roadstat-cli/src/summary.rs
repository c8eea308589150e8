//! Run summary rendering.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roadstat_model::format_numeric;

use crate::stats::ColumnStats;
use crate::types::{DatasetReport, DatasetStatus, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Data: {}", result.data_dir.display());
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Description"),
        header_cell("Rows"),
        header_cell("Records"),
        header_cell("Status"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let mut processed_count = 0usize;
    let mut total_records = 0usize;
    for report in &result.datasets {
        if report.status == DatasetStatus::Processed {
            processed_count += 1;
        }
        total_records += report.records.unwrap_or(0);
        table.add_row(vec![
            Cell::new(&report.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&report.description),
            count_cell(report.loaded_rows),
            count_cell(report.records),
            status_cell(&report.status),
            output_cell(report),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{processed_count} datasets processed"))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_stats_table(&result.stats);

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_stats_table(stats: &[ColumnStats]) {
    if stats.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Column"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Std"),
    ]);
    apply_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in stats {
        table.add_row(vec![
            Cell::new(&entry.dataset).fg(Color::Blue),
            Cell::new(&entry.column),
            Cell::new(format_numeric(entry.min)),
            Cell::new(format_numeric(entry.max)),
            Cell::new(format!("{:.2}", entry.mean)),
            Cell::new(format_numeric(entry.median)),
            Cell::new(format!("{:.2}", entry.std)),
        ]);
    }
    println!();
    println!("Summary statistics:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &DatasetStatus) -> Cell {
    match status {
        DatasetStatus::Processed => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        DatasetStatus::Failed(_) => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        DatasetStatus::Loaded => Cell::new("loaded").fg(Color::DarkGrey),
        DatasetStatus::Skipped => Cell::new("skipped").fg(Color::DarkGrey),
    }
}

fn output_cell(report: &DatasetReport) -> Cell {
    match &report.output {
        Some(path) => Cell::new(
            path.file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("-"),
        ),
        None => dim_cell("-"),
    }
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
