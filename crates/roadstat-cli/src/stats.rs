//! Summary statistics over processed tables.

use indexmap::IndexMap;

use roadstat_model::ProcessedTable;

/// Descriptive statistics for one numeric column of one processed table.
#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub dataset: String,
    pub column: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

/// Computes min/max/mean/median/std for every numeric column of every
/// processed table, in processing order.
pub fn summary_statistics(tables: &IndexMap<String, ProcessedTable>) -> Vec<ColumnStats> {
    let mut stats = Vec::new();
    for (name, table) in tables {
        for column in table.numeric_column_names() {
            let values = table.numeric_column(column);
            if values.is_empty() {
                continue;
            }
            stats.push(ColumnStats {
                dataset: name.clone(),
                column: column.to_string(),
                min: values.iter().copied().fold(f64::INFINITY, f64::min),
                max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                mean: mean(&values),
                median: median(&values),
                std: sample_std(&values),
            });
        }
    }
    stats
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite values"));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n-1 denominator); 0.0 for fewer than two
/// values so the statistics table stays finite.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadstat_model::Value;

    fn processed(columns: &[&str], rows: Vec<Vec<Value>>) -> ProcessedTable {
        let mut table = ProcessedTable::new(columns.iter().map(|c| (*c).to_string()).collect());
        for row in rows {
            table.push_row(row);
        }
        table
    }

    #[test]
    fn statistics_cover_numeric_columns_only() {
        let mut tables = IndexMap::new();
        tables.insert(
            "accidents_time".to_string(),
            processed(
                &["State", "Accidents"],
                vec![
                    vec![Value::Text("A".to_string()), Value::Int(2)],
                    vec![Value::Text("B".to_string()), Value::Int(4)],
                    vec![Value::Text("C".to_string()), Value::Int(9)],
                ],
            ),
        );

        let stats = summary_statistics(&tables);
        assert_eq!(stats.len(), 1);
        let accidents = &stats[0];
        assert_eq!(accidents.column, "Accidents");
        assert_eq!(accidents.min, 2.0);
        assert_eq!(accidents.max, 9.0);
        assert_eq!(accidents.mean, 5.0);
        assert_eq!(accidents.median, 4.0);
    }

    #[test]
    fn median_of_even_count_averages_middle_values() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[3.0, 1.0]), 2.0);
    }

    #[test]
    fn sample_std_matches_known_series() {
        // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 is ~2.138.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = sample_std(&values);
        assert!((std - 2.138).abs() < 0.001);
    }

    #[test]
    fn single_value_std_is_zero() {
        assert_eq!(sample_std(&[42.0]), 0.0);
    }
}
