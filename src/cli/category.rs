//! Category CLI commands
//!
//! Categories are derived from transactions, so the only command lists the
//! current totals.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::MomuneyResult;
use crate::reports::SummaryReport;
use crate::services::TransactionFilter;
use crate::storage::UserStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List every category with its total spending
    List,
}

/// Handle a category command
pub fn handle_category_command(
    store: &UserStore,
    settings: &Settings,
    cmd: CategoryCommands,
) -> MomuneyResult<()> {
    match cmd {
        CategoryCommands::List => {
            let categories = &store.user().categories;
            if categories.is_empty() {
                println!("No categories yet. Record a transaction to create one.");
                return Ok(());
            }

            let report = SummaryReport::generate(store.user(), &TransactionFilter::new());
            println!("{:<30} {:>14} {:>6}", "Category", "Spending", "Count");
            println!("{}", "-".repeat(52));
            for slice in &report.slices {
                println!(
                    "{:<30} {:>14} {:>6}",
                    slice.category_name,
                    slice.spending.format_with_symbol(&settings.currency_symbol),
                    slice.transaction_count
                );
            }
        }
    }

    Ok(())
}
