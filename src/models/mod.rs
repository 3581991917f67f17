//! Core data models for Momuney
//!
//! Transactions, the categories derived from them, vendors, and the `User`
//! aggregate that owns them all.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;
pub mod vendor;

pub use category::{categories_equal, Category};
pub use ids::TransactionId;
pub use money::Money;
pub use transaction::Transaction;
pub use user::User;
pub use vendor::Vendor;
