//! YAML Export functionality
//!
//! The same full export as JSON, in a human-readable form.

use std::io::Write;

use crate::error::{MomuneyError, MomuneyResult};
use crate::export::json::FullExport;
use crate::models::User;

/// Export the full user to YAML
pub fn export_full_yaml<W: Write>(user: &User, writer: &mut W) -> MomuneyResult<()> {
    let export = FullExport::from_user(user);
    let io_err = |e: std::io::Error| MomuneyError::Export(e.to_string());

    writeln!(writer, "# Momuney Full Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MomuneyError::Export(e.to_string()))?;

    Ok(())
}
