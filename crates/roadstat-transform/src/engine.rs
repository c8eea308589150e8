//! The normalization orchestrator.
//!
//! Drives the per-dataset cleaners in fixed catalog order and accumulates
//! their outputs keyed by dataset name. A dataset that fails leaves no
//! output behind and never blocks the rest of the run; every attempt is
//! reported as a structured [`DatasetOutcome`] for the reporting layer.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use roadstat_model::{Dataset, ProcessedTable, RawTable};

use crate::cleaner::{CleanerRegistry, default_registry};

/// Result of one dataset's processing attempt.
#[derive(Debug, Clone)]
pub enum DatasetOutcome {
    /// Cleaned successfully; the output is in the processed map.
    Processed { dataset: Dataset, records: usize },
    /// No input table was loaded for this dataset.
    Skipped { dataset: Dataset },
    /// Cleaning failed; no output is exposed for this dataset.
    Failed { dataset: Dataset, reason: String },
}

impl DatasetOutcome {
    pub fn dataset(&self) -> Dataset {
        match self {
            DatasetOutcome::Processed { dataset, .. }
            | DatasetOutcome::Skipped { dataset }
            | DatasetOutcome::Failed { dataset, .. } => *dataset,
        }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, DatasetOutcome::Processed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DatasetOutcome::Failed { .. })
    }
}

/// Accumulates processed tables across datasets.
///
/// The processed map preserves insertion order, which equals the catalog's
/// processing order; reprocessing a dataset replaces its table in place.
pub struct Engine {
    registry: &'static CleanerRegistry,
    processed: IndexMap<String, ProcessedTable>,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    pub fn with_registry(registry: &'static CleanerRegistry) -> Self {
        Self {
            registry,
            processed: IndexMap::new(),
        }
    }

    /// Processes one dataset, recording or clearing its output.
    pub fn process(&mut self, dataset: Dataset, table: &RawTable) -> DatasetOutcome {
        let Some(cleaner) = self.registry.get(dataset) else {
            return DatasetOutcome::Skipped { dataset };
        };
        match cleaner.clean(table) {
            Ok(output) => {
                let records = output.record_count();
                info!(
                    dataset = dataset.key(),
                    input_rows = table.row_count(),
                    records,
                    "dataset processed"
                );
                self.processed.insert(dataset.key().to_string(), output);
                DatasetOutcome::Processed { dataset, records }
            }
            Err(error) => {
                warn!(dataset = dataset.key(), %error, "dataset failed");
                self.processed.shift_remove(dataset.key());
                DatasetOutcome::Failed {
                    dataset,
                    reason: error.to_string(),
                }
            }
        }
    }

    /// Processes every cleanable dataset present in `tables`, in catalog
    /// order, continuing past failures.
    pub fn process_all(&mut self, tables: &BTreeMap<String, RawTable>) -> Vec<DatasetOutcome> {
        let mut outcomes = Vec::new();
        for dataset in Dataset::ALL {
            if self.registry.get(dataset).is_none() {
                continue;
            }
            match tables.get(dataset.key()) {
                Some(table) => outcomes.push(self.process(dataset, table)),
                None => {
                    debug!(dataset = dataset.key(), "no input table");
                    outcomes.push(DatasetOutcome::Skipped { dataset });
                }
            }
        }
        let processed_count = outcomes.iter().filter(|o| o.is_processed()).count();
        info!(processed_count, "processing complete");
        outcomes
    }

    /// Read accessor for one dataset's output.
    pub fn get(&self, name: &str) -> Option<&ProcessedTable> {
        self.processed.get(name)
    }

    /// Batch accessor: all outputs in processing order.
    pub fn tables(&self) -> &IndexMap<String, ProcessedTable> {
        &self.processed
    }

    pub fn into_tables(self) -> IndexMap<String, ProcessedTable> {
        self.processed
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
