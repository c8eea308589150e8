//! Accidents-by-time cleaning.

use roadstat_model::{Dataset, ProcessedTable, RawTable, Result, Value};

use crate::columns::resolve_identifier;
use crate::reshape::reshape_time_slots;

/// Reshapes the wide time-slot table into (State, TimeSlot, Accidents)
/// records, one per identifier and 3-hour band.
pub(crate) fn clean_accidents_by_time(table: &RawTable) -> Result<ProcessedTable> {
    let dataset = Dataset::AccidentsTime;
    let identifier = resolve_identifier(dataset, &table.headers)?;

    let mut output = ProcessedTable::new(vec![
        dataset.identifier_name().to_string(),
        "TimeSlot".to_string(),
        "Accidents".to_string(),
    ]);
    for record in reshape_time_slots(table, dataset, identifier) {
        output.push_row(vec![
            Value::Text(record.identifier),
            Value::Text(record.slot.to_string()),
            Value::Int(record.count),
        ]);
    }
    Ok(output)
}
