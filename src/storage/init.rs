//! Storage initialization
//!
//! Handles first-run setup: directories, settings and an empty store file.

use crate::config::{paths::MomuneyPaths, settings::Settings};
use crate::error::MomuneyError;

use super::user::{LoadOutcome, UserStore};

/// Initialize storage for a fresh installation
///
/// Existing data is left alone; returns whether a new store file was created.
pub fn initialize_storage(paths: &MomuneyPaths, settings: &Settings) -> Result<bool, MomuneyError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    let store = UserStore::open(paths)?;
    Ok(store.outcome() == LoadOutcome::Created)
}
