//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{parse_date, FilterArgs};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{MomuneyError, MomuneyResult};
use crate::models::Money;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::UserStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount spent (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Vendor name
        #[arg(short, long)]
        vendor: String,
        /// Vendor location
        #[arg(short, long, default_value = "")]
        location: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
    },
    /// List transactions, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a single transaction
    Show {
        /// Transaction ID (short or full)
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (short or full)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut UserStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> MomuneyResult<()> {
    let mut service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            vendor,
            location,
            date,
            memo,
        } => {
            let amount = Money::parse(&amount).map_err(|e| MomuneyError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                amount,
                category,
                date,
                vendor_name: vendor,
                vendor_location: location,
                memo,
            })?;

            println!("Recorded transaction: {}", txn.id);
            print!("{}", format_transaction_details(&txn, settings));
        }
        TransactionCommands::List { filter, limit } => {
            let filter = filter.into_filter(settings)?;
            let limit = limit.unwrap_or(settings.list_limit);
            let transactions = service.list_recent(&filter, limit);

            print!("{}", format_transaction_register(&transactions, settings));
        }
        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }
        TransactionCommands::Delete { id } => {
            let removed = service.delete(&id)?;
            println!("Deleted transaction: {} ({})", removed.id, removed);
        }
    }

    Ok(())
}
