//! File I/O utilities with atomic writes
//!
//! Reads tell a missing file apart from a corrupt one; writes go through a
//! temp file and a rename so the store is either fully replaced or untouched.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MomuneyError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// A file that exists but does not parse yields [`MomuneyError::StoreCorrupt`];
/// any other I/O failure yields [`MomuneyError::Storage`].
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, MomuneyError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(MomuneyError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| {
            if e.is_io() {
                MomuneyError::Storage(format!("Failed to read {}: {}", path.display(), e))
            } else {
                MomuneyError::StoreCorrupt {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MomuneyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MomuneyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MomuneyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| MomuneyError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MomuneyError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MomuneyError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MomuneyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
