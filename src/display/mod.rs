//! Display formatting for terminal output

pub mod transaction;
pub mod vendor;

pub use transaction::{format_transaction_details, format_transaction_register};
pub use vendor::format_vendor_list;
