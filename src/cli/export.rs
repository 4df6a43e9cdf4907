//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV table
    Csv,
    /// JSON, full records
    Json,
    /// YAML, full records
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// File to export expenses to
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

/// Write all expenses to the requested file
///
/// Failures here are fatal: the error is returned, not printed.
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let file = File::create(&args.file).map_err(|e| {
        ExpenseError::Export(format!(
            "Could not create export file {}: {}",
            args.file.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let expenses = storage.expenses.all();

    match args.format {
        ExportFormat::Csv => export_expenses_csv(expenses, &settings.date_format, &mut writer)?,
        ExportFormat::Json => export_expenses_json(expenses, &mut writer)?,
        ExportFormat::Yaml => export_expenses_yaml(expenses, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write {}: {}", args.file.display(), e)))?;

    println!("Expenses exported to {}", args.file.display());
    Ok(())
}
