//! Wide-to-long reshaping for time-slot and month tables.
//!
//! Both reshapers are driven by fixed ordered catalogs. The time-slot
//! fragments keep the source tables' irregular spellings (mixed "hrs"
//! punctuation, truncated ranges) and map each to a canonical band label;
//! the month reshaper walks the calendar so output order never depends on
//! source column order.

use roadstat_model::{Dataset, RawTable};

use crate::columns::{ACCIDENT_MARKER, ColumnRole, infer_role};
use crate::numeric::lenient_i64;

/// Ordered catalog of time-slot column fragments and their canonical labels.
/// A column matching none of these is silently excluded from the reshape.
pub const TIME_SLOTS: [(&str, &str); 8] = [
    ("0000 hrs", "00:00-03:00"),
    ("0300 hrs to 0600 hrs", "03:00-06:00"),
    ("0600 hrs to 0900 hrs", "06:00-09:00"),
    ("0900 hrs to 1200 hrs", "09:00-12:00"),
    ("1200 hrs to 1500 hrs", "12:00-15:00"),
    ("1500 hrs to 1800 hrs", "15:00-18:00"),
    ("1800 hrs to 2100", "18:00-21:00"),
    ("2100 hrs. to 2400", "21:00-24:00"),
];

/// Calendar months in order; `MonthNum` is the 1-based position here.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical band label for a time-slot column header, first catalog
/// fragment contained in the header.
pub fn slot_label(header: &str) -> Option<&'static str> {
    TIME_SLOTS
        .iter()
        .find(|(fragment, _)| header.contains(fragment))
        .map(|(_, label)| *label)
}

/// One (identifier, time slot, count) record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotRecord {
    pub identifier: String,
    pub slot: &'static str,
    pub count: i64,
}

/// One (identifier, month, count) record with its calendar position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRecord {
    pub identifier: String,
    pub month: &'static str,
    pub month_num: i64,
    pub count: i64,
}

/// Reshapes a wide time-slot table into one record per (identifier, band).
///
/// Qualifying columns must carry both the road-accident prefix marker and
/// the hour marker, must not be a same-row total, and must match a catalog
/// fragment. Values coerce leniently; a zero-qualifying-column table yields
/// zero records.
pub fn reshape_time_slots(
    table: &RawTable,
    dataset: Dataset,
    identifier_index: usize,
) -> Vec<TimeSlotRecord> {
    let candidates = dataset.identifier_candidates();
    let slot_columns: Vec<(usize, &'static str)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| infer_role(header, candidates) == ColumnRole::TimeSlotMeasure)
        .filter_map(|(index, header)| slot_label(header).map(|label| (index, label)))
        .collect();

    let mut records = Vec::with_capacity(table.row_count() * slot_columns.len());
    for row in &table.rows {
        let identifier = row
            .get(identifier_index)
            .map(String::as_str)
            .unwrap_or("")
            .to_string();
        for &(index, label) in &slot_columns {
            records.push(TimeSlotRecord {
                identifier: identifier.clone(),
                slot: label,
                count: lenient_i64(row.get(index).map(String::as_str).unwrap_or("")),
            });
        }
    }
    records
}

/// Reshapes a wide month table into one record per (identifier, month), in
/// calendar order regardless of source column order.
///
/// Each month is looked up as the exact column `Road Accidents - <Month>`;
/// absent months are skipped.
pub fn reshape_months(table: &RawTable, identifier_index: usize) -> Vec<MonthRecord> {
    let month_columns: Vec<(usize, &'static str, i64)> = MONTHS
        .iter()
        .enumerate()
        .filter_map(|(position, month)| {
            let column = format!("{ACCIDENT_MARKER} - {month}");
            table
                .column_index(&column)
                .map(|index| (index, *month, position as i64 + 1))
        })
        .collect();

    let mut records = Vec::with_capacity(table.row_count() * month_columns.len());
    for row in &table.rows {
        let identifier = row
            .get(identifier_index)
            .map(String::as_str)
            .unwrap_or("")
            .to_string();
        for &(index, month, month_num) in &month_columns {
            records.push(MonthRecord {
                identifier: identifier.clone(),
                month,
                month_num,
                count: lenient_i64(row.get(index).map(String::as_str).unwrap_or("")),
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn slot_labels_cover_the_day() {
        assert_eq!(
            slot_label("Road Accidents - 0000 hrs to 0300 hrs (Night)"),
            Some("00:00-03:00")
        );
        assert_eq!(
            slot_label("Road Accidents - 2100 hrs. to 2400 hrs (Night)"),
            Some("21:00-24:00")
        );
        assert_eq!(slot_label("Road Accidents - Total"), None);
    }

    #[test]
    fn total_column_is_excluded_from_reshape() {
        let table = table(
            &[
                "State",
                "Road Accidents - 0000 hrs to 0300 hrs",
                "Road Accidents - 0300 hrs to 0600 hrs",
                "Road Accidents - Total",
            ],
            &[&["StateA", "5", "7", "12"]],
        );
        let records = reshape_time_slots(&table, Dataset::AccidentsTime, 0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slot, "00:00-03:00");
        assert_eq!(records[0].count, 5);
        assert_eq!(records[1].slot, "03:00-06:00");
        assert_eq!(records[1].count, 7);
        let sum: i64 = records.iter().map(|record| record.count).sum();
        assert_eq!(sum, 12);
    }

    #[test]
    fn no_qualifying_columns_yields_no_records() {
        let table = table(&["State", "Population"], &[&["StateA", "100"]]);
        assert!(reshape_time_slots(&table, Dataset::AccidentsTime, 0).is_empty());
    }

    #[test]
    fn months_come_out_in_calendar_order() {
        let table = table(
            &[
                "State",
                "Road Accidents - March",
                "Road Accidents - January",
            ],
            &[&["StateA", "30", "10"]],
        );
        let records = reshape_months(&table, 0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month, "January");
        assert_eq!(records[0].month_num, 1);
        assert_eq!(records[0].count, 10);
        assert_eq!(records[1].month, "March");
        assert_eq!(records[1].month_num, 3);
        assert_eq!(records[1].count, 30);
    }

    #[test]
    fn unparseable_counts_become_zero_records() {
        let table = table(
            &["State", "Road Accidents - 0000 hrs to 0300 hrs"],
            &[&["StateA", "n/a"]],
        );
        let records = reshape_time_slots(&table, Dataset::AccidentsTime, 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].count, 0);
    }
}
