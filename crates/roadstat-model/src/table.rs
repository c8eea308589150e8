//! In-memory table types shared between the loader and the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw table as handed over by the loader: ordered named columns with
/// untyped text cells. Every row has exactly `headers.len()` cells; the
/// loader pads or truncates records to enforce this.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this exact header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell text at (row, column), empty string when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A typed output cell. Raw string artifacts never survive into processed
/// tables; non-identifier cells are always `Int` or `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the cell, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::Text(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{}", format_numeric(*value)),
            Value::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Formats a floating-point number without trailing zeros ("10.50" -> "10.5",
/// "10.0" -> "10").
pub fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// The engine's output for one dataset: either long-format records or a wide
/// derived table, both carried as ordered columns over typed rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ProcessedTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row; the row must have one cell per column.
    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row width mismatch");
        self.rows.push(row);
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// All numeric values of a column, in row order. Text cells are skipped,
    /// so an identifier column yields an empty vector.
    pub fn numeric_column(&self, name: &str) -> Vec<f64> {
        let Some(index) = self.column_index(name) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(index).and_then(Value::as_f64))
            .collect()
    }

    /// Names of columns whose cells are all numeric (and at least one row).
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| row.get(*index).is_some_and(Value::is_numeric))
            })
            .map(|(_, name)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_finds_first_match() {
        let table = RawTable::new(
            vec!["State".to_string(), "Cases".to_string()],
            vec![vec!["StateA".to_string(), "10".to_string()]],
        );
        assert_eq!(table.column_index("Cases"), Some(1));
        assert_eq!(table.column_index("Missing"), None);
        assert_eq!(table.cell(0, 1), "10");
        assert_eq!(table.cell(5, 5), "");
    }

    #[test]
    fn value_display_trims_float_zeros() {
        assert_eq!(Value::Float(10.0).to_string(), "10");
        assert_eq!(Value::Float(10.5).to_string(), "10.5");
        assert_eq!(Value::Int(1234).to_string(), "1234");
        assert_eq!(Value::Text("StateA".to_string()).to_string(), "StateA");
    }

    #[test]
    fn numeric_column_skips_text() {
        let mut table = ProcessedTable::new(vec!["State".to_string(), "Cases".to_string()]);
        table.push_row(vec![Value::Text("A".to_string()), Value::Int(10)]);
        table.push_row(vec![Value::Text("B".to_string()), Value::Int(20)]);
        assert_eq!(table.numeric_column("Cases"), vec![10.0, 20.0]);
        assert!(table.numeric_column("State").is_empty());
        assert_eq!(table.numeric_column_names(), vec!["Cases"]);
    }
}
