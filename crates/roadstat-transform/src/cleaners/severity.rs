//! Accidents-severity cleaning.

use roadstat_model::{Dataset, ProcessedTable, RawTable, Result, Value};

use crate::columns::resolve_identifier;
use crate::derive::ratio_per_100;
use crate::numeric::lenient_i64;
use crate::project::project_severity_columns;

/// Projects the severity table down to its total-scope columns and derives
/// fatality and injury rates where the inputs are present. One output row
/// per input row.
pub(crate) fn clean_accidents_severity(table: &RawTable) -> Result<ProcessedTable> {
    let dataset = Dataset::AccidentsSeverity;
    let identifier = resolve_identifier(dataset, &table.headers)?;
    let projected = project_severity_columns(table);

    let position_of = |name: &str| projected.iter().position(|column| column.name == name);
    let cases = position_of("Cases");
    let died = position_of("Died");
    let injured = position_of("Injured");
    let with_fatality_rate = cases.is_some() && died.is_some();
    let with_injury_rate = cases.is_some() && injured.is_some();

    let mut columns = vec![dataset.identifier_name().to_string()];
    columns.extend(projected.iter().map(|column| column.name.clone()));
    if with_fatality_rate {
        columns.push("FatalityRate".to_string());
    }
    if with_injury_rate {
        columns.push("InjuryRate".to_string());
    }

    let mut output = ProcessedTable::new(columns);
    for row in &table.rows {
        let counts: Vec<i64> = projected
            .iter()
            .map(|column| lenient_i64(row.get(column.index).map(String::as_str).unwrap_or("")))
            .collect();

        let mut cells = Vec::with_capacity(output.columns.len());
        cells.push(Value::Text(
            row.get(identifier).cloned().unwrap_or_default(),
        ));
        cells.extend(counts.iter().map(|count| Value::Int(*count)));
        if with_fatality_rate {
            let rate = ratio_per_100(
                counts[died.unwrap()] as f64,
                counts[cases.unwrap()] as f64,
            );
            cells.push(Value::Float(rate));
        }
        if with_injury_rate {
            let rate = ratio_per_100(
                counts[injured.unwrap()] as f64,
                counts[cases.unwrap()] as f64,
            );
            cells.push(Value::Float(rate));
        }
        output.push_row(cells);
    }
    Ok(output)
}
