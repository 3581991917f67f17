//! Category model
//!
//! A spending bucket and its running total. Categories are derived from
//! transactions rather than edited directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;

/// A spending category with its aggregated total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    #[serde(default)]
    pub spending: Money,
}

impl Category {
    pub fn new(name: impl Into<String>, spending: Money) -> Self {
        Self {
            name: name.into(),
            spending,
        }
    }

    /// Add an amount to the running total
    pub fn add_spending(&mut self, amount: Money) {
        self.spending += amount;
    }

    /// Remove an amount from the running total
    pub fn remove_spending(&mut self, amount: Money) {
        self.spending -= amount;
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.spending)
    }
}

/// Whether two category maps hold the same names with the same totals
pub fn categories_equal(a: &BTreeMap<String, Category>, b: &BTreeMap<String, Category>) -> bool {
    a.len() == b.len()
        && a.iter().all(|(name, category)| {
            b.get(name)
                .map(|other| other.spending == category.spending)
                .unwrap_or(false)
        })
}
