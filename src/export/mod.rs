//! Export module for Momuney
//!
//! - CSV: transactions, spreadsheet-compatible
//! - JSON: the full user with export metadata
//! - YAML: the same full export, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
