//! Column-role inference and identifier resolution.
//!
//! Source tables label the same semantic field differently from file to file
//! ("State/UT", "State/Ut/City", "Cities"), embed units in measure headers and
//! carry serial-number columns. Roles are inferred from header text alone via
//! an ordered rule list; new source-table formats register new rules here
//! without touching the reshaping code.

use roadstat_model::{Dataset, NormalizeError, Result};

/// The semantic purpose a raw column plays in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Keys each row (a state, union territory or city name).
    Identifier,
    /// One measurement per 3-hour band.
    TimeSlotMeasure,
    /// One measurement per calendar month.
    MonthMeasure,
    /// One measurement per named category (severity scope, vehicle class).
    CategoryMeasure,
    /// Running row number from the source export.
    SerialIndex,
    /// Carries no value for normalization.
    Ignored,
}

/// One inference rule: a column whose header contains `marker` (and
/// `requires`, when set) plays `role`. Rules are evaluated in order; the
/// first match wins.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub marker: &'static str,
    pub requires: Option<&'static str>,
    pub role: ColumnRole,
}

const fn rule(marker: &'static str, requires: Option<&'static str>, role: ColumnRole) -> RoleRule {
    RoleRule {
        marker,
        requires,
        role,
    }
}

/// Marker shared by all road-accident measure columns.
pub const ACCIDENT_MARKER: &str = "Road Accidents";

/// Marker selecting total-scope severity columns.
pub const SEVERITY_TOTAL_MARKER: &str = "Total Traffic Accidents";

/// Ordered role rules. "Total" outranks the time-slot rule so same-row total
/// columns never enter a reshape, while the severity projector's columns are
/// claimed first by the more specific marker above it.
pub const ROLE_RULES: &[RoleRule] = &[
    rule("Sl. No.", None, ColumnRole::SerialIndex),
    rule("Sl No", None, ColumnRole::SerialIndex),
    rule(SEVERITY_TOTAL_MARKER, None, ColumnRole::CategoryMeasure),
    rule("Total", None, ColumnRole::Ignored),
    rule("hrs", Some(ACCIDENT_MARKER), ColumnRole::TimeSlotMeasure),
    rule("January", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("February", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("March", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("April", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("May", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("June", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("July", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("August", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("September", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("October", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("November", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
    rule("December", Some(ACCIDENT_MARKER), ColumnRole::MonthMeasure),
];

/// Infers the role a header plays, given the dataset's identifier candidates.
///
/// Identifier candidates are checked first (case-sensitive substring, as the
/// per-dataset catalogs spell them), then the ordered rule list. Headers that
/// match nothing are `Ignored`.
pub fn infer_role(header: &str, identifier_candidates: &[&str]) -> ColumnRole {
    if identifier_candidates
        .iter()
        .any(|candidate| header.contains(candidate))
    {
        return ColumnRole::Identifier;
    }
    ROLE_RULES
        .iter()
        .find(|rule| {
            header.contains(rule.marker)
                && rule.requires.is_none_or(|required| header.contains(required))
        })
        .map(|rule| rule.role)
        .unwrap_or(ColumnRole::Ignored)
}

/// Resolves the identifier column for a dataset: the first header containing
/// any of the dataset's candidate substrings, in column order.
///
/// Returns the column index; fatal for the dataset when nothing matches.
pub fn resolve_identifier(dataset: Dataset, headers: &[String]) -> Result<usize> {
    let candidates = dataset.identifier_candidates();
    headers
        .iter()
        .position(|header| candidates.iter().any(|candidate| header.contains(candidate)))
        .ok_or_else(|| NormalizeError::IdentifierNotFound {
            dataset: dataset.key().to_string(),
            candidates: candidates.iter().map(|c| (*c).to_string()).collect(),
        })
}

/// True for serial-number columns dropped before reshaping.
pub fn is_serial_index(header: &str) -> bool {
    ROLE_RULES
        .iter()
        .filter(|rule| rule.role == ColumnRole::SerialIndex)
        .any(|rule| header.contains(rule.marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_wins_over_rules() {
        assert_eq!(
            infer_role("State/UT", Dataset::AccidentsTime.identifier_candidates()),
            ColumnRole::Identifier
        );
    }

    #[test]
    fn time_slot_requires_accident_marker() {
        let candidates = Dataset::AccidentsTime.identifier_candidates();
        assert_eq!(
            infer_role("Road Accidents - 0000 hrs to 0300 hrs", candidates),
            ColumnRole::TimeSlotMeasure
        );
        assert_eq!(
            infer_role("Railway Crossings - 0000 hrs", &[]),
            ColumnRole::Ignored
        );
    }

    #[test]
    fn total_columns_never_reshape() {
        assert_eq!(
            infer_role("Road Accidents - Total", &[]),
            ColumnRole::Ignored
        );
        assert_eq!(
            infer_role("Road Accidents - Total - 0000 hrs to 0300 hrs", &[]),
            ColumnRole::Ignored
        );
    }

    #[test]
    fn severity_total_marker_is_category() {
        assert_eq!(
            infer_role("Total Traffic Accidents - Cases", &[]),
            ColumnRole::CategoryMeasure
        );
    }

    #[test]
    fn serial_index_detected() {
        assert_eq!(infer_role("Sl. No.", &[]), ColumnRole::SerialIndex);
        assert!(is_serial_index("Sl. No."));
        assert!(!is_serial_index("State/UT"));
    }

    #[test]
    fn month_columns_match() {
        assert_eq!(
            infer_role("Road Accidents - January", &[]),
            ColumnRole::MonthMeasure
        );
        assert_eq!(infer_role("January Sales", &[]), ColumnRole::Ignored);
    }

    #[test]
    fn resolver_returns_first_match_in_column_order() {
        let headers = vec![
            "Sl. No.".to_string(),
            "Name of State/UT".to_string(),
            "Another State Column".to_string(),
        ];
        assert_eq!(resolve_identifier(Dataset::AccidentsTime, &headers).unwrap(), 1);
    }

    #[test]
    fn resolver_fails_without_candidates() {
        let headers = vec!["Region".to_string()];
        let error = resolve_identifier(Dataset::AccidentsTime, &headers).unwrap_err();
        assert!(error.to_string().contains("accidents_time"));
    }
}
