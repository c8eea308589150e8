//! Vehicle-registrations cleaning.

use roadstat_model::{Dataset, ProcessedTable, RawTable, Result, Value};

use crate::columns::{is_serial_index, resolve_identifier};
use crate::derive::{FOUR_WHEELER_COLUMNS, is_two_wheeler_column};
use crate::numeric::lenient_i64;

/// Normalizes every vehicle-category column to an integer count and derives
/// `TotalTwoWheelers` / `TotalFourWheelers` where their inputs are present.
pub(crate) fn clean_vehicle_registrations(table: &RawTable) -> Result<ProcessedTable> {
    let dataset = Dataset::VehicleRegistrations;
    let identifier = resolve_identifier(dataset, &table.headers)?;

    let measures: Vec<(usize, &String)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(index, header)| *index != identifier && !is_serial_index(header))
        .collect();

    let two_wheelers: Vec<usize> = measures
        .iter()
        .enumerate()
        .filter(|(_, (_, name))| is_two_wheeler_column(name))
        .map(|(position, _)| position)
        .collect();
    let four_wheelers: Vec<usize> = FOUR_WHEELER_COLUMNS
        .iter()
        .filter_map(|wanted| measures.iter().position(|(_, name)| name.as_str() == *wanted))
        .collect();
    let with_two_wheelers = !two_wheelers.is_empty();
    let with_four_wheelers = four_wheelers.len() == FOUR_WHEELER_COLUMNS.len();

    let mut columns = vec![dataset.identifier_name().to_string()];
    columns.extend(measures.iter().map(|(_, name)| (*name).clone()));
    if with_two_wheelers {
        columns.push("TotalTwoWheelers".to_string());
    }
    if with_four_wheelers {
        columns.push("TotalFourWheelers".to_string());
    }

    let mut output = ProcessedTable::new(columns);
    for row in &table.rows {
        let counts: Vec<i64> = measures
            .iter()
            .map(|(index, _)| lenient_i64(row.get(*index).map(String::as_str).unwrap_or("")))
            .collect();

        let mut cells = Vec::with_capacity(output.columns.len());
        cells.push(Value::Text(
            row.get(identifier).cloned().unwrap_or_default(),
        ));
        cells.extend(counts.iter().map(|count| Value::Int(*count)));
        if with_two_wheelers {
            cells.push(Value::Int(
                two_wheelers.iter().map(|position| counts[*position]).sum(),
            ));
        }
        if with_four_wheelers {
            cells.push(Value::Int(
                four_wheelers.iter().map(|position| counts[*position]).sum(),
            ));
        }
        output.push_row(cells);
    }
    Ok(output)
}
