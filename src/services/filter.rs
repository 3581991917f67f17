//! Transaction filtering
//!
//! Narrows a transaction list by an inclusive date range and by a keyword
//! searched in the vendor name or vendor location. Both criteria must hold
//! for a transaction to be kept, and the input order is preserved.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{MomuneyError, MomuneyResult};
use crate::models::Transaction;

/// Which vendor field a keyword is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    VendorName,
    VendorLocation,
}

impl SearchField {
    /// The value of this field on a transaction
    pub fn value_of<'a>(&self, txn: &'a Transaction) -> &'a str {
        match self {
            Self::VendorName => &txn.vendor.name,
            Self::VendorLocation => &txn.vendor.location,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VendorName => write!(f, "Vendor name"),
            Self::VendorLocation => write!(f, "Vendor location"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "name" | "vendor name" => Ok(Self::VendorName),
            "location" | "vendor location" => Ok(Self::VendorLocation),
            _ => Err(format!(
                "Unknown search field '{}' (expected 'name' or 'location')",
                s
            )),
        }
    }
}

/// Filter criteria for a transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Earliest date kept (inclusive)
    pub date_from: Option<NaiveDate>,
    /// Latest date kept (inclusive)
    pub date_to: Option<NaiveDate>,
    /// Field the keyword is searched in; `None` disables the keyword search
    pub search_field: Option<SearchField>,
    /// Keyword to search for; empty disables the keyword search
    pub keyword: String,
}

impl TransactionFilter {
    /// A filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_from(mut self, date: Option<NaiveDate>) -> Self {
        self.date_from = date;
        self
    }

    pub fn with_date_to(mut self, date: Option<NaiveDate>) -> Self {
        self.date_to = date;
        self
    }

    pub fn with_search(mut self, field: Option<SearchField>, keyword: impl Into<String>) -> Self {
        self.search_field = field;
        self.keyword = keyword.into();
        self
    }

    /// Whether the date criterion is reversed (from after to)
    pub fn has_reversed_range(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from > to)
    }

    /// Whether the keyword criterion is active
    pub fn has_keyword(&self) -> bool {
        self.search_field.is_some() && !self.keyword.is_empty()
    }

    /// Whether this filter keeps every transaction
    pub fn is_empty(&self) -> bool {
        let no_dates = self.date_from.is_none() && self.date_to.is_none();
        !self.has_keyword() && (no_dates || self.has_reversed_range())
    }

    /// Reject a reversed date range
    ///
    /// [`apply`](Self::apply) ignores such a range; callers that want the
    /// problem reported call this first.
    pub fn validate(&self) -> MomuneyResult<()> {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) if from > to => {
                Err(MomuneyError::InvalidDateRange { from, to })
            }
            _ => Ok(()),
        }
    }

    /// Whether a transaction falls inside the date range
    pub fn matches_date(&self, txn: &Transaction) -> bool {
        if self.has_reversed_range() {
            return true;
        }

        let after_start = self.date_from.map_or(true, |from| txn.date >= from);
        let before_end = self.date_to.map_or(true, |to| txn.date <= to);
        after_start && before_end
    }

    /// Whether a transaction's selected vendor field contains the keyword
    pub fn matches_keyword(&self, txn: &Transaction) -> bool {
        match self.search_field {
            Some(field) if !self.keyword.is_empty() => field
                .value_of(txn)
                .to_lowercase()
                .contains(&self.keyword.to_lowercase()),
            _ => true,
        }
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.matches_keyword(txn) && self.matches_date(txn)
    }

    /// Return the transactions that pass the filter, in their original order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        if let Err(e) = self.validate() {
            warn!("Ignoring date filter: {}", e);
        }

        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect()
    }
}
