//! Service layer for Momuney
//!
//! Pure functions over transaction lists (aggregation, filtering, percentage
//! formatting) plus the services that read and update the user store.

pub mod aggregate;
pub mod filter;
pub mod percentage;
pub mod transaction;
pub mod vendor;

pub use aggregate::{aggregate_by_category, category_totals, total_spending};
pub use filter::{SearchField, TransactionFilter};
pub use percentage::to_percentage;
pub use transaction::{CreateTransactionInput, TransactionService};
pub use vendor::{VendorService, VendorUsage};
