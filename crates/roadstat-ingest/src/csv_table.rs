//! CSV parsing into raw tables.

use std::path::Path;

use csv::ReaderBuilder;

use roadstat_model::RawTable;

use crate::decode::decode_text;
use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads one CSV file into a `RawTable`.
///
/// The first non-blank row is the header; blank rows are skipped and every
/// data row is padded or truncated to the header width.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_text(&bytes);
    parse_csv_text(&text, path)
}

fn parse_csv_text(text: &str, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable::default());
    }
    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for index in 0..headers.len() {
            row.push(record.get(index).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(RawTable::new(headers, rows))
}

/// Concatenates tables row-wise, aligning columns by header name.
///
/// Headers are collected in first-seen order across all inputs; rows missing
/// a column get an empty cell, matching how the source archives split one
/// logical dataset across per-city files with drifting column sets.
pub fn concat_tables(tables: Vec<RawTable>) -> RawTable {
    let mut headers: Vec<String> = Vec::new();
    for table in &tables {
        for header in &table.headers {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
    }
    let mut rows = Vec::new();
    for table in &tables {
        let indices: Vec<Option<usize>> = headers
            .iter()
            .map(|header| table.column_index(header))
            .collect();
        for source_row in &table.rows {
            let row: Vec<String> = indices
                .iter()
                .map(|index| {
                    index
                        .and_then(|column| source_row.get(column).cloned())
                        .unwrap_or_default()
                })
                .collect();
            rows.push(row);
        }
    }
    RawTable::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> RawTable {
        parse_csv_text(text, &PathBuf::from("test.csv")).expect("parse csv")
    }

    #[test]
    fn header_and_rows_are_normalized() {
        let table = parse("\u{feff} State/UT ,  Cases \nStateA,10\n\n StateB ,20\n");
        assert_eq!(table.headers, vec!["State/UT", "Cases"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, 0), "StateB");
    }

    #[test]
    fn ragged_rows_are_padded_to_header_width() {
        let table = parse("State,Cases,Died\nStateA,10\nStateB,20,3,extra\n");
        assert_eq!(table.rows[0], vec!["StateA", "10", ""]);
        assert_eq!(table.rows[1], vec!["StateB", "20", "3"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse("");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn concat_aligns_by_header_name() {
        let first = RawTable::new(
            vec!["City".to_string(), "Cars".to_string()],
            vec![vec!["CityA".to_string(), "100".to_string()]],
        );
        let second = RawTable::new(
            vec!["Cars".to_string(), "City".to_string(), "Jeeps".to_string()],
            vec![vec!["5".to_string(), "CityB".to_string(), "7".to_string()]],
        );
        let combined = concat_tables(vec![first, second]);
        assert_eq!(combined.headers, vec!["City", "Cars", "Jeeps"]);
        assert_eq!(combined.rows[0], vec!["CityA", "100", ""]);
        assert_eq!(combined.rows[1], vec!["CityB", "5", "7"]);
    }
}
