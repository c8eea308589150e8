//! Column filter/rename projection for the severity table.
//!
//! The severity source is wide: per-subcategory breakdowns (road, railway)
//! plus total-scope columns. Projection keeps only the total-scope measures
//! and renames each by stripping the shared prefix; rows are never expanded.

use roadstat_model::{Dataset, RawTable};

use crate::columns::{ColumnRole, SEVERITY_TOTAL_MARKER, infer_role};

/// A surviving measure column: its source index and stripped output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedColumn {
    pub index: usize,
    pub name: String,
}

/// Selects total-scope severity columns in column order, stripping the
/// `Total Traffic Accidents - ` prefix from each surviving name.
pub fn project_severity_columns(table: &RawTable) -> Vec<ProjectedColumn> {
    let candidates = Dataset::AccidentsSeverity.identifier_candidates();
    let prefix = format!("{SEVERITY_TOTAL_MARKER} - ");
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| infer_role(header, candidates) == ColumnRole::CategoryMeasure)
        .map(|(index, header)| ProjectedColumn {
            index,
            name: header.replacen(&prefix, "", 1).trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_total_scope_columns_and_strips_prefix() {
        let table = RawTable::new(
            vec![
                "State/Ut".to_string(),
                "Road Accidents - Cases".to_string(),
                "Total Traffic Accidents - Cases".to_string(),
                "Total Traffic Accidents - Injured".to_string(),
                "Total Traffic Accidents - Died".to_string(),
            ],
            Vec::new(),
        );
        let projected = project_severity_columns(&table);
        let names: Vec<&str> = projected.iter().map(|column| column.name.as_str()).collect();
        assert_eq!(names, vec!["Cases", "Injured", "Died"]);
        assert_eq!(projected[0].index, 2);
    }

    #[test]
    fn no_matching_columns_is_empty_not_an_error() {
        let table = RawTable::new(vec!["State/Ut".to_string()], Vec::new());
        assert!(project_severity_columns(&table).is_empty());
    }
}
