//! Path management for Momuney
//!
//! ## Path Resolution Order
//!
//! 1. `MOMUNEY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/momuney` on Linux, `%APPDATA%\momuney` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MomuneyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MOMUNEY_DATA_DIR";

/// Name of the single store file
pub const USER_DATA_FILE: &str = "UserData.json";

/// Manages all paths used by Momuney
#[derive(Debug, Clone)]
pub struct MomuneyPaths {
    base_dir: PathBuf,
}

impl MomuneyPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MomuneyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MomuneyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the user data store
    pub fn user_data_file(&self) -> PathBuf {
        self.data_dir().join(USER_DATA_FILE)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MomuneyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MomuneyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MomuneyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MomuneyError> {
    ProjectDirs::from("com", "momuney", "momuney")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MomuneyError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MomuneyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MomuneyPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MomuneyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.user_data_file(),
            temp_dir.path().join("data").join("UserData.json")
        );
    }
}
