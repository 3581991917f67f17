//! Momuney - personal spending tracker
//!
//! This library provides the core of the Momuney application: a single user's
//! transactions, the category totals derived from them and a vendor directory,
//! all persisted in one local JSON file, plus the filtering and aggregation
//! used to summarize spending.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, categories, vendors and the `User` aggregate
//! - `storage`: Whole-file JSON store for the `User`
//! - `services`: Aggregation, filtering, percentages, transaction/vendor services
//! - `reports`: Spending summary by category
//! - `display`: Terminal tables
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: Command handlers for the `momuney` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use momuney::config::MomuneyPaths;
//! use momuney::reports::SummaryReport;
//! use momuney::services::{SearchField, TransactionFilter};
//! use momuney::storage::UserStore;
//!
//! let paths = MomuneyPaths::new()?;
//! let store = UserStore::open(&paths)?;
//! let filter = TransactionFilter::new().with_search(Some(SearchField::VendorLocation), "downtown");
//! let report = SummaryReport::generate(store.user(), &filter);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MomuneyError, MomuneyResult};
