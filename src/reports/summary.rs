//! Spending Summary
//!
//! The category breakdown of a (possibly filtered) transaction list: one slice
//! per category with its total and share of overall spending.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{MomuneyError, MomuneyResult};
use crate::models::{categories_equal, Category, Money, User};
use crate::services::{aggregate_by_category, to_percentage, total_spending, TransactionFilter};

/// One category's share of spending
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySlice {
    pub category_name: String,
    pub spending: Money,
    pub transaction_count: usize,
    /// Share of total spending in `[0, 1]`; zero when nothing was spent
    pub fraction: f64,
}

impl SummarySlice {
    /// Whole-number percentage, e.g. "60%"
    pub fn percentage(&self) -> String {
        to_percentage(self.fraction)
    }

    /// Chart label: "Food, $30.00 (60%)"
    pub fn label(&self, currency_symbol: &str) -> String {
        format!(
            "{}, {} ({})",
            self.category_name,
            self.spending.format_with_symbol(currency_symbol),
            self.percentage()
        )
    }
}

/// Why a summary has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySummary {
    /// The user has not recorded anything yet
    NoTransactions,
    /// Transactions exist but none pass the filter
    NothingMatched,
}

/// Spending summary by category
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub filter: TransactionFilter,
    /// Slices sorted by spending, largest first
    pub slices: Vec<SummarySlice>,
    pub categories: BTreeMap<String, Category>,
    pub total_spending: Money,
    pub total_transactions: usize,
    /// Transactions recorded before filtering
    pub all_transactions: usize,
}

impl SummaryReport {
    /// Summarize the user's transactions that pass `filter`
    pub fn generate(user: &User, filter: &TransactionFilter) -> Self {
        let transactions = filter.apply(&user.transactions);
        let categories = aggregate_by_category(&transactions);
        let total = total_spending(&categories);

        let mut slices: Vec<SummarySlice> = categories
            .values()
            .map(|category| SummarySlice {
                category_name: category.name.clone(),
                spending: category.spending,
                transaction_count: transactions
                    .iter()
                    .filter(|t| t.category == category.name)
                    .count(),
                fraction: category.spending.fraction_of(total).unwrap_or(0.0),
            })
            .collect();

        slices.sort_by(|a, b| {
            b.spending
                .cmp(&a.spending)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        Self {
            filter: filter.clone(),
            slices,
            categories,
            total_spending: total,
            total_transactions: transactions.len(),
            all_transactions: user.transactions.len(),
        }
    }

    /// Why this summary is empty, if it is
    pub fn empty_reason(&self) -> Option<EmptySummary> {
        if self.all_transactions == 0 {
            Some(EmptySummary::NoTransactions)
        } else if self.slices.is_empty() {
            Some(EmptySummary::NothingMatched)
        } else {
            None
        }
    }

    /// Whether the filtered totals are the same as `categories`
    pub fn same_categories(&self, categories: &BTreeMap<String, Category>) -> bool {
        categories_equal(&self.categories, categories)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        match self.empty_reason() {
            Some(EmptySummary::NoTransactions) => {
                return "Please input a new transaction\n".to_string()
            }
            Some(EmptySummary::NothingMatched) => return "No categories found!\n".to_string(),
            None => {}
        }

        let mut output = String::new();

        output.push_str("Spending Summary");
        if let Some(description) = describe_filter(&self.filter) {
            output.push_str(&format!(" ({})", description));
        }
        output.push('\n');
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<30} {:>14} {:>6} {:>6}\n",
            "Category", "Spending", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<30} {:>14} {:>6} {:>6}\n",
                slice.category_name,
                slice.spending.format_with_symbol(currency_symbol),
                slice.transaction_count,
                slice.percentage()
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14} {:>6}\n",
            "TOTAL",
            self.total_spending.format_with_symbol(currency_symbol),
            self.total_transactions
        ));

        output
    }

    /// Export the slices to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> MomuneyResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Spending", "Transaction Count", "Percentage"])
            .map_err(|e| MomuneyError::Export(e.to_string()))?;

        for slice in &self.slices {
            csv_writer
                .write_record([
                    slice.category_name.clone(),
                    format!("{:.2}", slice.spending.as_f64()),
                    slice.transaction_count.to_string(),
                    slice.percentage(),
                ])
                .map_err(|e| MomuneyError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| MomuneyError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Human-readable description of the active criteria, if any
fn describe_filter(filter: &TransactionFilter) -> Option<String> {
    let mut parts = Vec::new();

    if !filter.has_reversed_range() {
        match (filter.date_from, filter.date_to) {
            (Some(from), Some(to)) => parts.push(format!("{} to {}", from, to)),
            (Some(from), None) => parts.push(format!("from {}", from)),
            (None, Some(to)) => parts.push(format!("until {}", to)),
            (None, None) => {}
        }
    }

    if let (true, Some(field)) = (filter.has_keyword(), filter.search_field) {
        parts.push(format!("{} contains \"{}\"", field, filter.keyword));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, Vendor};
    use crate::services::SearchField;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn sample_user() -> User {
        let mut user = User::default();
        for (cents, category, d, vendor, location) in [
            (1000, "Food", 1, "VendorA", "LocX"),
            (2000, "Food", 2, "VendorB", "LocY"),
            (500, "Rent", 3, "VendorC", "LocX"),
        ] {
            user.add_transaction(Transaction::new(
                Money::from_cents(cents),
                category,
                day(d),
                Vendor::new(vendor, location),
            ));
        }
        user
    }

    #[test]
    fn test_unfiltered_summary() {
        let user = sample_user();
        let report = SummaryReport::generate(&user, &TransactionFilter::new());

        assert_eq!(report.total_spending.cents(), 3500);
        assert_eq!(report.slices.len(), 2);
        assert_eq!(report.slices[0].category_name, "Food");
        assert_eq!(report.slices[0].spending.cents(), 3000);
        assert_eq!(report.slices[0].transaction_count, 2);
        assert_eq!(report.slices[0].percentage(), "86%");
        assert_eq!(report.slices[1].percentage(), "14%");
        assert!(report.same_categories(&user.categories));
    }

    #[test]
    fn test_filtered_summary() {
        let user = sample_user();
        let filter = TransactionFilter::new().with_search(Some(SearchField::VendorLocation), "locx");
        let report = SummaryReport::generate(&user, &filter);

        assert_eq!(report.categories["Food"].spending.cents(), 1000);
        assert_eq!(report.categories["Rent"].spending.cents(), 500);
        assert_eq!(report.slices[0].label("$"), "Food, $10.00 (67%)");
        assert!(!report.same_categories(&user.categories));
    }

    #[test]
    fn test_empty_reasons() {
        let empty = SummaryReport::generate(&User::default(), &TransactionFilter::new());
        assert_eq!(empty.empty_reason(), Some(EmptySummary::NoTransactions));
        assert!(empty.format_terminal("$").contains("Please input a new transaction"));

        let filter = TransactionFilter::new().with_search(Some(SearchField::VendorName), "nobody");
        let none = SummaryReport::generate(&sample_user(), &filter);
        assert_eq!(none.empty_reason(), Some(EmptySummary::NothingMatched));
        assert!(none.format_terminal("$").contains("No categories found!"));
    }

    #[test]
    fn test_zero_spending_has_zero_share() {
        let mut user = User::default();
        user.add_transaction(Transaction::new(
            Money::zero(),
            "Gifts",
            day(1),
            Vendor::new("Friend", "Home"),
        ));

        let report = SummaryReport::generate(&user, &TransactionFilter::new());
        assert_eq!(report.slices[0].percentage(), "0%");
    }

    #[test]
    fn test_format_terminal_describes_filter() {
        let filter = TransactionFilter::new()
            .with_date_from(Some(day(1)))
            .with_date_to(Some(day(2)));
        let output = SummaryReport::generate(&sample_user(), &filter).format_terminal("$");

        assert!(output.contains("2025-01-01 to 2025-01-02"));
        assert!(output.contains("Food"));
        assert!(!output.contains("Rent"));
        assert!(output.contains("100%"));
    }

    #[test]
    fn test_export_csv() {
        let report = SummaryReport::generate(&sample_user(), &TransactionFilter::new());
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Category,Spending,Transaction Count,Percentage");
        assert_eq!(lines[1], "Food,30.00,2,86%");
        assert_eq!(lines[2], "Rent,5.00,1,14%");
    }
}
