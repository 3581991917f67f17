//! JSON storage layer for Momuney
//!
//! All user data lives in one file, `UserData.json`, which is read once and
//! rewritten wholesale through [`UserStore`]. Writes are atomic.

pub mod file_io;
pub mod init;
pub mod user;

pub use init::initialize_storage;
pub use user::{LoadOutcome, UserStore};
