//! CLI commands for data export

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_expenses_csv, export_json, export_yaml};
use crate::tracker::ExpenseTracker;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (expenses and summary)
    Json,
    /// YAML format (expenses and summary, human-readable)
    Yaml,
}

/// Handle `export`
pub fn handle_export(
    tracker: &dyn ExpenseTracker,
    output: PathBuf,
    format: ExportFormat,
) -> LedgerResult<()> {
    let file = File::create(&output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let expenses = tracker.all_expenses();

    match format {
        ExportFormat::Csv => export_expenses_csv(&expenses, &mut writer)?,
        ExportFormat::Json => export_json(&expenses, &mut writer, true)?,
        ExportFormat::Yaml => export_yaml(&expenses, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses to: {}",
        expenses.len(),
        output.display()
    );

    Ok(())
}
