//! Reports module for Momuney
//!
//! Currently a single report: the spending summary by category.

pub mod summary;

pub use summary::{EmptySummary, SummaryReport, SummarySlice};
