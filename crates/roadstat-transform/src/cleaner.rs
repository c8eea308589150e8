//! Dataset cleaner trait and registry.
//!
//! Each recognized dataset kind gets one cleaning routine behind the
//! [`DatasetCleaner`] trait. The registry provides lookup by kind; datasets
//! without a registered cleaner (road statistics) are loaded and listed but
//! never normalized.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use roadstat_model::{Dataset, ProcessedTable, RawTable, Result};

use crate::cleaners;

/// Dataset-specific cleaning logic: identifier resolution, reshaping or
/// projection, numeric normalization and derived metrics for one kind.
pub trait DatasetCleaner: Send + Sync {
    /// The dataset kind this cleaner handles.
    fn dataset(&self) -> Dataset;

    fn description(&self) -> &'static str {
        "Dataset cleaner"
    }

    /// Normalizes one raw table into its processed form.
    ///
    /// # Errors
    ///
    /// Fails when the table has no resolvable identifier column; the failure
    /// is fatal for this dataset only.
    fn clean(&self, table: &RawTable) -> Result<ProcessedTable>;
}

/// Registry of cleaners indexed by dataset kind.
pub struct CleanerRegistry {
    cleaners: BTreeMap<Dataset, Box<dyn DatasetCleaner>>,
}

impl CleanerRegistry {
    pub fn new() -> Self {
        Self {
            cleaners: BTreeMap::new(),
        }
    }

    /// Registers a cleaner for its dataset kind, replacing any existing one.
    pub fn register(&mut self, cleaner: Box<dyn DatasetCleaner>) {
        self.cleaners.insert(cleaner.dataset(), cleaner);
    }

    pub fn get(&self, dataset: Dataset) -> Option<&dyn DatasetCleaner> {
        self.cleaners.get(&dataset).map(|cleaner| cleaner.as_ref())
    }

    pub fn len(&self) -> usize {
        self.cleaners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaners.is_empty()
    }

    /// Registered dataset kinds in catalog order.
    pub fn datasets(&self) -> impl Iterator<Item = Dataset> + '_ {
        Dataset::ALL
            .into_iter()
            .filter(|dataset| self.cleaners.contains_key(dataset))
    }
}

impl Default for CleanerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: OnceLock<CleanerRegistry> = OnceLock::new();

/// The standard registry with one cleaner per cleaned dataset kind.
pub fn default_registry() -> &'static CleanerRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> CleanerRegistry {
    let mut registry = CleanerRegistry::new();
    registry.register(Box::new(FunctionCleaner::new(
        Dataset::AccidentsTime,
        "Reshape per-time-slot accident columns into long records",
        cleaners::clean_accidents_by_time,
    )));
    registry.register(Box::new(FunctionCleaner::new(
        Dataset::AccidentsMonth,
        "Reshape per-month accident columns into long records",
        cleaners::clean_accidents_by_month,
    )));
    registry.register(Box::new(FunctionCleaner::new(
        Dataset::AccidentsSeverity,
        "Project total-scope severity columns and derive rates",
        cleaners::clean_accidents_severity,
    )));
    registry.register(Box::new(FunctionCleaner::new(
        Dataset::VehicleRegistrations,
        "Normalize vehicle counts and derive category totals",
        cleaners::clean_vehicle_registrations,
    )));
    registry
}

/// Adapts a cleaning function to the [`DatasetCleaner`] trait.
struct FunctionCleaner {
    dataset: Dataset,
    description: &'static str,
    clean_fn: fn(&RawTable) -> Result<ProcessedTable>,
}

impl FunctionCleaner {
    fn new(
        dataset: Dataset,
        description: &'static str,
        clean_fn: fn(&RawTable) -> Result<ProcessedTable>,
    ) -> Self {
        Self {
            dataset,
            description,
            clean_fn,
        }
    }
}

impl DatasetCleaner for FunctionCleaner {
    fn dataset(&self) -> Dataset {
        self.dataset
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn clean(&self, table: &RawTable) -> Result<ProcessedTable> {
        (self.clean_fn)(table)
    }
}
