//! User store
//!
//! Owns the single `UserData.json` file. The whole `User` is read once when
//! the store is opened and written back wholesale on every update.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::paths::MomuneyPaths;
use crate::error::MomuneyResult;
use crate::models::User;

use super::file_io::{read_json_optional, write_json_atomic};

/// How the user data came into memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing store file was read
    Loaded,
    /// No store file existed; a default user was created and written
    Created,
}

/// Handle to the persisted user data
pub struct UserStore {
    path: PathBuf,
    user: User,
    outcome: LoadOutcome,
}

impl UserStore {
    /// Open the store at the configured location
    pub fn open(paths: &MomuneyPaths) -> MomuneyResult<Self> {
        Self::open_at(paths.user_data_file())
    }

    /// Open the store file at `path`, creating it with a default user if absent
    ///
    /// A corrupt file is reported, never overwritten.
    pub fn open_at(path: impl Into<PathBuf>) -> MomuneyResult<Self> {
        let path = path.into();

        match read_json_optional::<User, _>(&path)? {
            Some(mut user) => {
                // Totals on disk may be stale if the file was edited by hand
                user.recompute_categories();
                info!(
                    "Loaded {} transactions from {}",
                    user.transactions.len(),
                    path.display()
                );
                Ok(Self {
                    path,
                    user,
                    outcome: LoadOutcome::Loaded,
                })
            }
            None => {
                info!(
                    "No data file at {}, creating default user",
                    path.display()
                );
                let user = User::create_default_user();
                write_json_atomic(&path, &user)?;
                Ok(Self {
                    path,
                    user,
                    outcome: LoadOutcome::Created,
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn outcome(&self) -> LoadOutcome {
        self.outcome
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Apply `f` to the user and persist the result
    ///
    /// The in-memory user is only replaced once the write succeeds.
    pub fn update<F, T>(&mut self, f: F) -> MomuneyResult<T>
    where
        F: FnOnce(&mut User) -> MomuneyResult<T>,
    {
        let mut draft = self.user.clone();
        let value = f(&mut draft)?;
        self.save_user(&draft)?;
        self.user = draft;
        Ok(value)
    }

    fn save_user(&self, user: &User) -> MomuneyResult<()> {
        debug!("Writing user data to {}", self.path.display());
        write_json_atomic(&self.path, user)
    }
}
