//! Dataset loading.
//!
//! Reads raw files from a configured data root into in-memory tables keyed by
//! dataset name. A dataset that fails to load is skipped with a warning and
//! its key omitted from the result, never supplied as a partial table.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use roadstat_model::{Dataset, RawTable};

use crate::csv_table::{concat_tables, read_csv_table};
use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

/// Loads one dataset from its subdirectory under `data_dir`.
///
/// Single-table datasets read the first CSV file (sorted by name); the
/// per-city archives (vehicle registrations, road statistics) concatenate
/// every readable file, skipping unreadable ones.
pub fn load_dataset(data_dir: &Path, dataset: Dataset) -> Result<RawTable> {
    let dir = data_dir.join(dataset.source_dir());
    let files = list_csv_files(&dir)?;
    if files.is_empty() {
        return Err(IngestError::NoCsvFiles { path: dir });
    }

    match dataset {
        Dataset::VehicleRegistrations | Dataset::RoadStatistics => {
            let mut tables = Vec::new();
            for path in &files {
                match read_csv_table(path) {
                    Ok(table) => tables.push(table),
                    Err(error) => {
                        warn!(
                            dataset = dataset.key(),
                            path = %path.display(),
                            %error,
                            "skipping unreadable file"
                        );
                    }
                }
            }
            if tables.is_empty() {
                return Err(IngestError::NoCsvFiles { path: dir });
            }
            Ok(concat_tables(tables))
        }
        _ => read_csv_table(&files[0]),
    }
}

/// Loads every recognized dataset, skipping those that fail.
pub fn load_all(data_dir: &Path) -> BTreeMap<String, RawTable> {
    let mut tables = BTreeMap::new();
    for dataset in Dataset::ALL {
        match load_dataset(data_dir, dataset) {
            Ok(table) => {
                debug!(
                    dataset = dataset.key(),
                    rows = table.row_count(),
                    columns = table.column_count(),
                    "dataset loaded"
                );
                tables.insert(dataset.key().to_string(), table);
            }
            Err(error) => {
                warn!(dataset = dataset.key(), %error, "dataset skipped");
            }
        }
    }
    info!(dataset_count = tables.len(), "load complete");
    tables
}

/// Row/column counts for a loaded table, for CLI listings.
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

/// Summarizes loaded tables in map order.
pub fn table_info(tables: &BTreeMap<String, RawTable>) -> Vec<TableInfo> {
    tables
        .iter()
        .map(|(name, table)| TableInfo {
            name: name.clone(),
            rows: table.row_count(),
            columns: table.column_count(),
        })
        .collect()
}
