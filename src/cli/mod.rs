//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod summary;
pub mod transaction;
pub mod vendor;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{MomuneyError, MomuneyResult};
use crate::services::{SearchField, TransactionFilter};

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportFormat};
pub use summary::{handle_summary_command, SummaryArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use vendor::{handle_vendor_command, VendorCommands};

/// Date range and keyword options shared by list and summary commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Vendor field to search: "name" or "location"
    #[arg(long = "search-by")]
    pub search_by: Option<SearchField>,

    /// Keyword to look for in the selected vendor field
    #[arg(short, long)]
    pub keyword: Option<String>,
}

impl FilterArgs {
    /// Build a validated filter, falling back to the configured search field
    pub fn into_filter(self, settings: &Settings) -> MomuneyResult<TransactionFilter> {
        let keyword = self.keyword.unwrap_or_default();
        let search_field = self.search_by.or(settings.default_search_field);

        if !keyword.is_empty() && search_field.is_none() {
            return Err(MomuneyError::Validation(
                "--keyword needs --search-by name|location".into(),
            ));
        }

        let filter = TransactionFilter::new()
            .with_date_from(self.from.as_deref().map(parse_date).transpose()?)
            .with_date_to(self.to.as_deref().map(parse_date).transpose()?)
            .with_search(search_field, keyword);

        filter.validate()?;
        Ok(filter)
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> MomuneyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| MomuneyError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("01/15/2025").is_err());
    }

    #[test]
    fn test_into_filter() {
        let args = FilterArgs {
            from: Some("2025-01-01".into()),
            to: Some("2025-01-31".into()),
            search_by: Some(SearchField::VendorName),
            keyword: Some("acme".into()),
        };

        let filter = args.into_filter(&Settings::default()).unwrap();
        assert!(filter.has_keyword());
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2025, 1, 31));
    }

    #[test]
    fn test_keyword_without_field() {
        let args = FilterArgs {
            keyword: Some("acme".into()),
            ..Default::default()
        };
        assert!(args.clone().into_filter(&Settings::default()).is_err());

        let settings = Settings {
            default_search_field: Some(SearchField::VendorLocation),
            ..Settings::default()
        };
        let filter = args.into_filter(&settings).unwrap();
        assert_eq!(filter.search_field, Some(SearchField::VendorLocation));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let args = FilterArgs {
            from: Some("2025-02-01".into()),
            to: Some("2025-01-01".into()),
            ..Default::default()
        };

        let err = args.into_filter(&Settings::default()).unwrap_err();
        assert!(matches!(err, MomuneyError::InvalidDateRange { .. }));
    }
}
