//! Traffic-table normalization engine.
//!
//! Turns loosely-structured government statistics tables into clean,
//! analysis-ready ones:
//!
//! - **columns**: identifier resolution and column-role inference over an
//!   ordered rule list
//! - **numeric**: lenient numeric coercion (total, zero on failure)
//! - **reshape**: wide-to-long time-slot and month reshaping over fixed
//!   catalogs
//! - **project**: severity column filter/rename projection
//! - **derive**: rate metrics and vehicle-category totals
//! - **cleaner** / **engine**: per-dataset routines behind a registry,
//!   orchestrated with per-dataset failure isolation

pub mod cleaner;
mod cleaners;
pub mod columns;
pub mod derive;
pub mod engine;
pub mod numeric;
pub mod project;
pub mod reshape;

pub use cleaner::{CleanerRegistry, DatasetCleaner, default_registry};
pub use columns::{ColumnRole, RoleRule, infer_role, resolve_identifier};
pub use engine::{DatasetOutcome, Engine};
pub use numeric::{lenient_f64, lenient_i64};
pub use reshape::{MONTHS, MonthRecord, TIME_SLOTS, TimeSlotRecord, reshape_months, reshape_time_slots};
