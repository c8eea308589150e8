//! The processing pipeline with explicit stages.
//!
//! 1. **Load**: read raw dataset tables from the data folder
//! 2. **Transform**: run the normalization engine over the loaded tables
//! 3. **Export**: write processed tables as CSV (skipped on dry runs)
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; per-dataset failures are carried as data, never panics.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use indexmap::IndexMap;
use tracing::{info, info_span};

use roadstat_ingest::{TableInfo, load_all, table_info};
use roadstat_model::{ProcessedTable, RawTable};
use roadstat_transform::{DatasetOutcome, Engine};

/// Result of the load stage.
#[derive(Debug)]
pub struct LoadResult {
    /// Loaded raw tables keyed by dataset name.
    pub tables: BTreeMap<String, RawTable>,
    /// Row/column summaries for the listing.
    pub infos: Vec<TableInfo>,
}

/// Reads every recognized dataset under `data_dir`.
///
/// Datasets that fail to load are skipped by the loader; an empty result is
/// only an error when the data folder itself is missing.
pub fn load(data_dir: &Path) -> Result<LoadResult> {
    if !data_dir.is_dir() {
        bail!("data folder not found: {}", data_dir.display());
    }
    let load_span = info_span!("load", data_dir = %data_dir.display());
    let _guard = load_span.enter();
    let start = Instant::now();

    let tables = load_all(data_dir);
    let infos = table_info(&tables);
    info!(
        dataset_count = tables.len(),
        duration_ms = start.elapsed().as_millis(),
        "load stage complete"
    );
    Ok(LoadResult { tables, infos })
}

/// Result of the transform stage.
#[derive(Debug)]
pub struct TransformResult {
    /// Per-dataset outcomes in processing order.
    pub outcomes: Vec<DatasetOutcome>,
    /// Processed tables keyed by dataset name, in processing order.
    pub tables: IndexMap<String, ProcessedTable>,
}

/// Runs the normalization engine over the loaded tables.
pub fn transform(tables: &BTreeMap<String, RawTable>) -> TransformResult {
    let transform_span = info_span!("transform");
    let _guard = transform_span.enter();
    let start = Instant::now();

    let mut engine = Engine::new();
    let outcomes = engine.process_all(tables);
    let processed_count = outcomes.iter().filter(|o| o.is_processed()).count();
    let failed_count = outcomes.iter().filter(|o| o.is_failed()).count();
    info!(
        processed_count,
        failed_count,
        duration_ms = start.elapsed().as_millis(),
        "transform stage complete"
    );
    TransformResult {
        outcomes,
        tables: engine.into_tables(),
    }
}
