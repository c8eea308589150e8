//! Command implementations.

use std::collections::BTreeMap;

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use roadstat_model::Dataset;
use roadstat_transform::DatasetOutcome;

use crate::cli::ProcessArgs;
use crate::export::export_tables;
use crate::pipeline::{LoadResult, TransformResult, load, transform};
use crate::stats::summary_statistics;
use crate::summary::apply_table_style;
use crate::types::{DatasetReport, DatasetStatus, RunResult};

/// Lists the recognized dataset catalog.
pub fn run_datasets() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "Dataset",
        "Source directory",
        "Identifier markers",
        "Description",
    ]);
    apply_table_style(&mut table);
    for dataset in Dataset::ALL {
        let markers = dataset.identifier_candidates().join(", ");
        table.add_row(vec![
            dataset.key().to_string(),
            dataset.source_dir().to_string(),
            if markers.is_empty() {
                "-".to_string()
            } else {
                markers
            },
            dataset.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Runs the full pipeline over a data folder.
pub fn run_process(args: &ProcessArgs) -> Result<RunResult> {
    let data_dir = &args.data_dir;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| data_dir.join("processed"));
    let run_span = info_span!("process", data_dir = %data_dir.display());
    let _run_guard = run_span.enter();

    let LoadResult { tables, infos } = load(data_dir)?;
    let TransformResult {
        outcomes,
        tables: processed,
    } = transform(&tables);

    let stats = if args.no_stats {
        Vec::new()
    } else {
        summary_statistics(&processed)
    };

    let mut errors: Vec<String> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            DatasetOutcome::Failed { dataset, reason } => {
                Some(format!("{}: {reason}", dataset.key()))
            }
            _ => None,
        })
        .collect();

    let mut output_paths = BTreeMap::new();
    if !args.dry_run && !processed.is_empty() {
        match export_tables(&processed, &output_dir) {
            Ok(paths) => output_paths = paths,
            Err(error) => errors.push(format!("export: {error:#}")),
        }
    }

    let mut datasets = Vec::new();
    for dataset in Dataset::ALL {
        let key = dataset.key();
        let outcome = outcomes.iter().find(|outcome| outcome.dataset() == dataset);
        let status = match outcome {
            Some(DatasetOutcome::Processed { .. }) => DatasetStatus::Processed,
            Some(DatasetOutcome::Failed { reason, .. }) => DatasetStatus::Failed(reason.clone()),
            Some(DatasetOutcome::Skipped { .. }) => DatasetStatus::Skipped,
            // No cleaner registered for this kind; it is listed when loaded.
            None if tables.contains_key(key) => DatasetStatus::Loaded,
            None => DatasetStatus::Skipped,
        };
        datasets.push(DatasetReport {
            name: key.to_string(),
            description: dataset.description().to_string(),
            loaded_rows: infos
                .iter()
                .find(|info| info.name == key)
                .map(|info| info.rows),
            records: processed.get(key).map(|table| table.record_count()),
            status,
            output: output_paths.get(key).cloned(),
        });
    }

    let has_errors = !errors.is_empty();
    Ok(RunResult {
        data_dir: data_dir.clone(),
        output_dir,
        datasets,
        stats,
        errors,
        has_errors,
    })
}
