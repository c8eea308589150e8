use std::path::PathBuf;

use crate::stats::ColumnStats;

/// Final outcome of a `process` run, consumed by the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub datasets: Vec<DatasetReport>,
    pub stats: Vec<ColumnStats>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

/// Per-dataset row of the run summary.
#[derive(Debug)]
pub struct DatasetReport {
    pub name: String,
    pub description: String,
    /// Rows in the loaded raw table, `None` when loading was skipped.
    pub loaded_rows: Option<usize>,
    /// Records in the processed table, `None` when not processed.
    pub records: Option<usize>,
    pub status: DatasetStatus,
    pub output: Option<PathBuf>,
}

/// Processing status of one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    /// Cleaned and accumulated into the output mapping.
    Processed,
    /// No raw table was loaded for this dataset.
    Skipped,
    /// Loaded but has no cleaning routine (listed only).
    Loaded,
    /// Cleaning failed; carries the reason.
    Failed(String),
}
