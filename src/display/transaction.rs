//! Transaction display formatting
//!
//! Register tables and detail views for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format(&settings.date_format).to_string(),
            category: truncate(&txn.category, 20),
            vendor: truncate(&txn.vendor.name, 24),
            location: truncate(&txn.vendor.location, 24),
            amount: txn.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<_> = transactions
        .iter()
        .map(|t| TransactionRow::from_transaction(t, settings))
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format(&settings.date_format)));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Vendor:      {}\n", txn.vendor.name));
    if !txn.vendor.location.is_empty() {
        output.push_str(&format!("Location:    {}\n", txn.vendor.location));
    }
    if !txn.memo.is_empty() {
        output.push_str(&format!("Memo:        {}\n", txn.memo));
    }

    output
}

/// Truncate a string to at most `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Vendor};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            Money::from_cents(5000),
            "Groceries",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Vendor::new("Test Store", "Main St"),
        )
        .with_memo("weekly shop")
    }

    #[test]
    fn test_format_register() {
        let formatted = format_transaction_register(&[sample()], &Settings::default());
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("Test Store"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("Location"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], &Settings::default());
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&sample(), &Settings::default());
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("Main St"));
        assert!(formatted.contains("weekly shop"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
