//! Data model for traffic-statistics normalization.

pub mod dataset;
pub mod error;
pub mod table;

pub use dataset::Dataset;
pub use error::{NormalizeError, Result};
pub use table::{ProcessedTable, RawTable, Value, format_numeric};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_serializes_untagged() {
        let row = vec![
            Value::Text("StateA".to_string()),
            Value::Int(5),
            Value::Float(10.5),
        ];
        let json = serde_json::to_string(&row).expect("serialize row");
        assert_eq!(json, "[\"StateA\",5,10.5]");
    }
}
