//! Transaction service
//!
//! Validates and records new transactions, lists them through a
//! [`TransactionFilter`], and deletes them by ID.

use chrono::NaiveDate;
use log::info;

use crate::error::{MomuneyError, MomuneyResult};
use crate::models::{Money, Transaction, Vendor};
use crate::storage::UserStore;

use super::filter::TransactionFilter;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub vendor_name: String,
    pub vendor_location: String,
    pub memo: Option<String>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a mut UserStore,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a mut UserStore) -> Self {
        Self { store }
    }

    /// Record a new transaction and persist the user
    pub fn create(&mut self, input: CreateTransactionInput) -> MomuneyResult<Transaction> {
        let vendor = Vendor::new(input.vendor_name.trim(), input.vendor_location.trim());

        let mut txn = Transaction::new(input.amount, input.category, input.date, vendor);
        if let Some(memo) = input.memo {
            txn.memo = memo.trim().to_string();
        }

        txn.validate()
            .map_err(|e| MomuneyError::Validation(e.to_string()))?;

        // Reuse the spelling already in the vendor directory
        if let Some(known) = self
            .store
            .user()
            .vendors
            .iter()
            .find(|v| v.same_as(&txn.vendor))
        {
            txn.vendor = known.clone();
        }

        let created = txn.clone();
        self.store.update(move |user| {
            user.add_transaction(txn);
            Ok(())
        })?;

        info!("Recorded transaction {} ({})", created.id, created.category);
        Ok(created)
    }

    /// Transactions passing `filter`, in stored order
    pub fn list(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        filter.apply(&self.store.user().transactions)
    }

    /// The most recent `limit` transactions passing `filter`, newest first
    pub fn list_recent(&self, filter: &TransactionFilter, limit: usize) -> Vec<Transaction> {
        let mut transactions = self.list(filter);
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        transactions.truncate(limit);
        transactions
    }

    /// Find a transaction by full UUID or short ID
    ///
    /// A short ID shared by several transactions is an error, never a guess.
    pub fn find(&self, identifier: &str) -> MomuneyResult<Transaction> {
        match self.store.user().find_transactions(identifier).as_slice() {
            [] => Err(MomuneyError::transaction_not_found(identifier)),
            [txn] => Ok((*txn).clone()),
            matches => Err(MomuneyError::AmbiguousId {
                identifier: identifier.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Delete a transaction and persist the user
    pub fn delete(&mut self, identifier: &str) -> MomuneyResult<Transaction> {
        let id = self.find(identifier)?.id;

        let removed = self.store.update(|user| {
            user.remove_transaction(id)
                .ok_or_else(|| MomuneyError::transaction_not_found(identifier))
        })?;

        info!("Deleted transaction {}", removed.id);
        Ok(removed)
    }
}
