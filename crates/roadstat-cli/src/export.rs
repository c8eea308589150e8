//! CSV export of processed tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

use roadstat_model::ProcessedTable;

/// Writes each processed table to `<output_dir>/<name>_processed.csv`,
/// creating the destination directory if absent.
///
/// Returns the written path per dataset name.
pub fn export_tables(
    tables: &IndexMap<String, ProcessedTable>,
    output_dir: &Path,
) -> Result<BTreeMap<String, PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let mut paths = BTreeMap::new();
    for (name, table) in tables {
        let path = output_dir.join(format!("{name}_processed.csv"));
        write_table(table, &path)?;
        debug!(dataset = %name, path = %path.display(), records = table.record_count(), "table written");
        paths.insert(name.clone(), path);
    }
    Ok(paths)
}

fn write_table(table: &ProcessedTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in &table.rows {
        let record: Vec<String> = row.iter().map(|value| value.to_string()).collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
