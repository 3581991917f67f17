//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{MomuneyError, MomuneyResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::UserStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full user data)
    Json,
    /// YAML format (full user data, human-readable)
    Yaml,
}

/// Write the user's data to `output` in `format`
pub fn handle_export_command(
    store: &UserStore,
    format: ExportFormat,
    output: PathBuf,
) -> MomuneyResult<()> {
    let file = File::create(&output).map_err(|e| {
        MomuneyError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let user = store.user();

    match format {
        ExportFormat::Csv => export_transactions_csv(&user.transactions, &mut writer)?,
        ExportFormat::Json => export_full_json(user, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(user, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| MomuneyError::Export(e.to_string()))?;

    println!(
        "Exported {} transactions to: {}",
        user.transactions.len(),
        output.display()
    );
    Ok(())
}
