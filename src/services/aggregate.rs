//! Category aggregation
//!
//! Groups transactions by category name and sums their amounts. The result is
//! rebuilt from scratch on every call, which is linear in the number of
//! transactions.

use std::collections::BTreeMap;

use crate::models::{Category, Money, Transaction};

/// Build a category map (name -> category with total spending) from transactions
pub fn aggregate_by_category(transactions: &[Transaction]) -> BTreeMap<String, Category> {
    let mut categories: BTreeMap<String, Category> = BTreeMap::new();

    for txn in transactions {
        categories
            .entry(txn.category.clone())
            .or_insert_with(|| Category::new(txn.category.clone(), Money::zero()))
            .add_spending(txn.amount);
    }

    categories
}

/// Category name -> total spending
pub fn category_totals(transactions: &[Transaction]) -> BTreeMap<String, Money> {
    aggregate_by_category(transactions)
        .into_iter()
        .map(|(name, category)| (name, category.spending))
        .collect()
}

/// Total spending across a category map
pub fn total_spending(categories: &BTreeMap<String, Category>) -> Money {
    categories.values().map(|c| c.spending).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vendor;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            Vendor::new("Vendor", "Somewhere"),
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_category(&[]).is_empty());
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_name() {
        let transactions = vec![txn(1000, "Food", 1), txn(2000, "Food", 2), txn(500, "Rent", 3)];

        let totals = category_totals(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"], Money::from_cents(3000));
        assert_eq!(totals["Rent"], Money::from_cents(500));
    }

    #[test]
    fn test_category_names_are_case_sensitive_keys() {
        let transactions = vec![txn(100, "Food", 1), txn(100, "food", 2)];
        assert_eq!(aggregate_by_category(&transactions).len(), 2);
    }

    #[test]
    fn test_sum_of_totals_equals_sum_of_amounts() {
        let transactions: Vec<_> = (1..=20)
            .map(|i| {
                let category = ["Food", "Rent", "Fun", "Travel"][i as usize % 4];
                txn(i * 137 % 5000, category, (i % 28 + 1) as u32)
            })
            .collect();

        let categories = aggregate_by_category(&transactions);
        let expected: Money = transactions.iter().map(|t| t.amount).sum();

        assert_eq!(total_spending(&categories), expected);
    }
}
