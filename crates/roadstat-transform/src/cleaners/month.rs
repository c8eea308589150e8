//! Accidents-by-month cleaning.

use roadstat_model::{Dataset, ProcessedTable, RawTable, Result, Value};

use crate::columns::resolve_identifier;
use crate::reshape::reshape_months;

/// Reshapes the wide month table into (State, Month, MonthNum, Accidents)
/// records in calendar order.
pub(crate) fn clean_accidents_by_month(table: &RawTable) -> Result<ProcessedTable> {
    let dataset = Dataset::AccidentsMonth;
    let identifier = resolve_identifier(dataset, &table.headers)?;

    let mut output = ProcessedTable::new(vec![
        dataset.identifier_name().to_string(),
        "Month".to_string(),
        "MonthNum".to_string(),
        "Accidents".to_string(),
    ]);
    for record in reshape_months(table, identifier) {
        output.push_row(vec![
            Value::Text(record.identifier),
            Value::Text(record.month.to_string()),
            Value::Int(record.month_num),
            Value::Int(record.count),
        ]);
    }
    Ok(output)
}
