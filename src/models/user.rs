//! User aggregate
//!
//! The root of everything persisted: the transaction list, the derived
//! category totals and the vendor directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use super::transaction::Transaction;
use super::vendor::Vendor;
use crate::services::aggregate::aggregate_by_category;

/// A single user's spending data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Category name -> unfiltered spending total
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,

    /// Every vendor seen so far, in order of first use
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

impl User {
    /// The user created on first run: no transactions, categories or vendors
    pub fn create_default_user() -> Self {
        Self::default()
    }

    /// Record a transaction, updating its category total and the vendor directory
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.categories
            .entry(transaction.category.clone())
            .or_insert_with(|| Category::new(transaction.category.clone(), Money::zero()))
            .add_spending(transaction.amount);

        self.remember_vendor(&transaction.vendor);
        self.transactions.push(transaction);
    }

    /// Remove a transaction by ID, returning it if it existed
    ///
    /// A category disappears once its last transaction is removed.
    pub fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(index);

        let still_used = self
            .transactions
            .iter()
            .any(|t| t.category == removed.category);

        if still_used {
            if let Some(category) = self.categories.get_mut(&removed.category) {
                category.remove_spending(removed.amount);
            }
        } else {
            self.categories.remove(&removed.category);
        }

        Some(removed)
    }

    /// Transactions whose full UUID or short `txn-xxxxxxxx` form matches
    pub fn find_transactions(&self, identifier: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.id.matches(identifier))
            .collect()
    }

    /// Rebuild category totals from the transaction list
    pub fn recompute_categories(&mut self) {
        self.categories = aggregate_by_category(&self.transactions);
    }

    /// Add a vendor to the directory unless an equivalent one is present
    pub fn remember_vendor(&mut self, vendor: &Vendor) {
        if !self.vendors.iter().any(|v| v.same_as(vendor)) {
            self.vendors.push(vendor.clone());
        }
    }
}
