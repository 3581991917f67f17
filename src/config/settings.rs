//! User settings for Momuney
//!
//! Display preferences and defaults for the summary and list commands.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::MomuneyPaths;
use crate::error::MomuneyError;
use crate::services::SearchField;

/// User settings for Momuney
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Field searched when `--keyword` is given without `--search-by`
    #[serde(default)]
    pub default_search_field: Option<SearchField>,

    /// Default number of rows shown by `transaction list`
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_list_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_search_field: None,
            list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MomuneyPaths) -> Result<Self, MomuneyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MomuneyError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MomuneyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would fail later when printing
    pub fn validate(&self) -> Result<(), MomuneyError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(MomuneyError::Config(format!(
                "Invalid date_format in settings: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MomuneyPaths) -> Result<(), MomuneyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MomuneyError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MomuneyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
