//! Configuration module for Momuney
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MomuneyPaths;
pub use settings::Settings;
