//! JSON Export functionality
//!
//! Exports the whole user, with export metadata, as pretty-printed JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{MomuneyError, MomuneyResult};
use crate::models::User;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full user export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub user: User,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub vendor_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_user(user: &User) -> Self {
        let dates = || user.transactions.iter().map(|t| t.date);

        let metadata = ExportMetadata {
            transaction_count: user.transactions.len(),
            category_count: user.categories.len(),
            vendor_count: user.vendors.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: user.clone(),
            metadata,
        }
    }
}

/// Export the full user to JSON
pub fn export_full_json<W: Write>(user: &User, writer: &mut W) -> MomuneyResult<()> {
    let export = FullExport::from_user(user);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| MomuneyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MomuneyError::Export(e.to_string()))?;

    Ok(())
}
