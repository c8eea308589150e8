//! Traffic dataset ingestion.
//!
//! Reads loosely-structured government CSV exports into [`RawTable`]s:
//!
//! - **decode**: UTF-8 with windows-1252 fallback
//! - **csv_table**: CSV parsing, header/cell normalization, concatenation
//! - **discovery**: dataset directory listing
//! - **loader**: per-dataset and batch loading
//!
//! [`RawTable`]: roadstat_model::RawTable

pub mod csv_table;
pub mod decode;
pub mod discovery;
pub mod error;
pub mod loader;

pub use csv_table::{concat_tables, read_csv_table};
pub use decode::decode_text;
pub use discovery::list_csv_files;
pub use error::{IngestError, Result};
pub use loader::{TableInfo, load_all, load_dataset, table_info};
