//! The fixed catalog of recognized datasets.
//!
//! Each dataset kind carries its stable output key, the source subdirectory
//! the loader reads from, and the identifier-column candidate substrings the
//! engine resolves against. New source-table formats register here without
//! touching the reshaping code.

/// A recognized dataset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dataset {
    AccidentsTime,
    AccidentsMonth,
    AccidentsSeverity,
    VehicleRegistrations,
    RoadStatistics,
}

impl Dataset {
    /// All dataset kinds in processing order.
    pub const ALL: [Dataset; 5] = [
        Dataset::AccidentsTime,
        Dataset::AccidentsMonth,
        Dataset::AccidentsSeverity,
        Dataset::VehicleRegistrations,
        Dataset::RoadStatistics,
    ];

    /// Stable key used for the loaded/processed maps and output file names.
    pub fn key(self) -> &'static str {
        match self {
            Dataset::AccidentsTime => "accidents_time",
            Dataset::AccidentsMonth => "accidents_month",
            Dataset::AccidentsSeverity => "accidents_severity",
            Dataset::VehicleRegistrations => "vehicle_registrations",
            Dataset::RoadStatistics => "road_statistics",
        }
    }

    /// Subdirectory of the data root the loader reads this dataset from.
    pub fn source_dir(self) -> &'static str {
        match self {
            Dataset::AccidentsTime => "Traffic_Accidents_Time",
            Dataset::AccidentsMonth => "Traffic_Accidents_Month",
            Dataset::AccidentsSeverity => "Accidents_Injureds_Deaths",
            Dataset::VehicleRegistrations => "Vehicles Registrations",
            Dataset::RoadStatistics => "Road Length Statistics",
        }
    }

    /// Substrings that identify the key column of this dataset, checked
    /// case-sensitively against headers in column order. The spellings vary
    /// per source table ("State/UT", "State/Ut", "City/Cities").
    pub fn identifier_candidates(self) -> &'static [&'static str] {
        match self {
            Dataset::AccidentsTime => &["State", "UT"],
            Dataset::AccidentsMonth => &["State", "UT", "City"],
            Dataset::AccidentsSeverity => &["State", "Ut"],
            Dataset::VehicleRegistrations => &["Cit", "cit"],
            Dataset::RoadStatistics => &[],
        }
    }

    /// Canonical name the resolved identifier column is renamed to.
    pub fn identifier_name(self) -> &'static str {
        match self {
            Dataset::VehicleRegistrations => "City",
            _ => "State",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dataset::AccidentsTime => "Road accidents by 3-hour time slot",
            Dataset::AccidentsMonth => "Road accidents by calendar month",
            Dataset::AccidentsSeverity => "Traffic accident cases, injuries and deaths",
            Dataset::VehicleRegistrations => "Registered vehicles by city and category",
            Dataset::RoadStatistics => "Road length by category and year",
        }
    }

    pub fn from_key(key: &str) -> Option<Dataset> {
        Dataset::ALL.into_iter().find(|dataset| dataset.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for dataset in Dataset::ALL {
            assert_eq!(Dataset::from_key(dataset.key()), Some(dataset));
        }
        assert_eq!(Dataset::from_key("unknown"), None);
    }

    #[test]
    fn cleaned_datasets_have_identifier_rules() {
        for dataset in [
            Dataset::AccidentsTime,
            Dataset::AccidentsMonth,
            Dataset::AccidentsSeverity,
            Dataset::VehicleRegistrations,
        ] {
            assert!(!dataset.identifier_candidates().is_empty());
        }
    }
}
