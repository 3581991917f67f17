//! Transaction model
//!
//! A single recorded expense. Transactions are never edited after creation;
//! correcting one means deleting it and recording a new one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::vendor::Vendor;

/// Maximum length of a category name
const MAX_CATEGORY_LEN: usize = 50;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: TransactionId,

    /// Amount spent
    pub amount: Money,

    /// Name of the spending category
    pub category: String,

    /// Calendar day of the transaction
    pub date: NaiveDate,

    pub vendor: Vendor,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        vendor: Vendor,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            category: category.into().trim().to_string(),
            date,
            vendor,
            memo: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach a memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        let category_len = self.category.chars().count();
        if category_len > MAX_CATEGORY_LEN {
            return Err(TransactionValidationError::CategoryTooLong(category_len));
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        self.vendor
            .validate()
            .map_err(|e| TransactionValidationError::InvalidVendor(e.to_string()))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.amount, self.category, self.vendor
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyCategory,
    CategoryTooLong(usize),
    NegativeAmount(Money),
    InvalidVendor(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category name cannot be empty"),
            Self::CategoryTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_LEN
            ),
            Self::NegativeAmount(amount) => {
                write!(f, "Spending amount cannot be negative: {}", amount)
            }
            Self::InvalidVendor(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
