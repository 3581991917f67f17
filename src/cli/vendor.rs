//! Vendor CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_vendor_list;
use crate::error::MomuneyResult;
use crate::services::VendorService;
use crate::storage::UserStore;

/// Vendor subcommands
#[derive(Subcommand, Debug)]
pub enum VendorCommands {
    /// List the vendor directory
    List {
        /// Only vendors whose name or location contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Handle a vendor command
pub fn handle_vendor_command(
    store: &UserStore,
    settings: &Settings,
    cmd: VendorCommands,
) -> MomuneyResult<()> {
    let service = VendorService::new(store);

    match cmd {
        VendorCommands::List { search } => {
            let vendors = match search {
                Some(query) => service.search(&query),
                None => service.list(),
            };
            print!("{}", format_vendor_list(&vendors, settings));
        }
    }

    Ok(())
}
