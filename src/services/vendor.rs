//! Vendor service
//!
//! Read access to the vendor directory, with per-vendor usage counts.

use crate::models::{Money, Vendor};
use crate::storage::UserStore;

/// A vendor and how often it has been paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorUsage {
    pub vendor: Vendor,
    pub transaction_count: usize,
    pub total_spending: Money,
}

/// Service for the vendor directory
pub struct VendorService<'a> {
    store: &'a UserStore,
}

impl<'a> VendorService<'a> {
    pub fn new(store: &'a UserStore) -> Self {
        Self { store }
    }

    /// All vendors, sorted by name then location
    pub fn list(&self) -> Vec<VendorUsage> {
        let mut vendors: Vec<_> = self
            .store
            .user()
            .vendors
            .iter()
            .map(|v| self.usage_of(v))
            .collect();

        vendors.sort_by(|a, b| {
            let key = |u: &VendorUsage| {
                (
                    Vendor::normalize(&u.vendor.name),
                    Vendor::normalize(&u.vendor.location),
                )
            };
            key(a).cmp(&key(b))
        });
        vendors
    }

    /// Vendors whose name or location contains `keyword` (case-insensitive)
    pub fn search(&self, keyword: &str) -> Vec<VendorUsage> {
        self.list()
            .into_iter()
            .filter(|u| u.vendor.mentions(keyword))
            .collect()
    }

    fn usage_of(&self, vendor: &Vendor) -> VendorUsage {
        let matching = self
            .store
            .user()
            .transactions
            .iter()
            .filter(|t| t.vendor.same_as(vendor));

        let (transaction_count, total_spending) = matching
            .fold((0, Money::zero()), |(count, total), t| (count + 1, total + t.amount));

        VendorUsage {
            vendor: vendor.clone(),
            transaction_count,
            total_spending,
        }
    }
}
