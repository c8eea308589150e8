//! Derived metrics over projected numeric columns.
//!
//! Every metric here is optional: it is computed only when its input columns
//! are present, and never required for a dataset to process.

/// Vehicle-category markers summed into `TotalTwoWheelers`. Overlap between
/// markers is by matching any of them per column, each column counted once.
pub const TWO_WHEELER_MARKERS: &[&str] = &["Two Wheeler", "Scooter", "Moped", "Motor Cycle"];

/// Exact column names summed into `TotalFourWheelers`.
pub const FOUR_WHEELER_COLUMNS: &[&str] = &["Cars", "Jeeps"];

/// Ratio per hundred, rounded to two decimal places.
///
/// A zero denominator yields `0.0`: downstream consumers only ever see
/// finite numbers, so zero-case rows read as zero-rate rows rather than a
/// non-numeric sentinel.
pub fn ratio_per_100(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    round2(numerator / denominator * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// True when a vehicle-category column counts toward the two-wheeler total.
pub fn is_two_wheeler_column(name: &str) -> bool {
    TWO_WHEELER_MARKERS.iter().any(|marker| name.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_match_reference_values() {
        assert_eq!(ratio_per_100(10.0, 100.0), 10.0);
        assert_eq!(ratio_per_100(40.0, 100.0), 40.0);
    }

    #[test]
    fn rates_round_to_two_decimals() {
        assert_eq!(ratio_per_100(1.0, 3.0), 33.33);
        assert_eq!(ratio_per_100(2.0, 3.0), 66.67);
    }

    #[test]
    fn zero_denominator_is_zero_not_nan() {
        let rate = ratio_per_100(10.0, 0.0);
        assert_eq!(rate, 0.0);
        assert!(rate.is_finite());
    }

    #[test]
    fn two_wheeler_markers_overlap_per_column() {
        assert!(is_two_wheeler_column("Two Wheelers (Scooters)"));
        assert!(is_two_wheeler_column("Motor Cycles"));
        assert!(is_two_wheeler_column("Mopeds"));
        assert!(!is_two_wheeler_column("Cars"));
    }
}
