//! Vendor directory display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::transaction::truncate;
use crate::config::Settings;
use crate::services::VendorUsage;

#[derive(Tabled)]
struct VendorRow {
    #[tabled(rename = "Vendor")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Transactions")]
    count: usize,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Format the vendor directory as a table
pub fn format_vendor_list(vendors: &[VendorUsage], settings: &Settings) -> String {
    if vendors.is_empty() {
        return "No vendors found.\n".to_string();
    }

    let rows: Vec<_> = vendors
        .iter()
        .map(|u| VendorRow {
            name: truncate(&u.vendor.name, 30),
            location: truncate(&u.vendor.location, 30),
            count: u.transaction_count,
            spent: u.total_spending.format_with_symbol(&settings.currency_symbol),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}
