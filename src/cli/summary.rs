//! Summary CLI command
//!
//! Prints the category breakdown of the filtered transactions, or writes it
//! to a CSV file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use super::FilterArgs;
use crate::config::Settings;
use crate::error::{MomuneyError, MomuneyResult};
use crate::reports::SummaryReport;
use crate::storage::UserStore;

/// Arguments for `momuney summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Export to CSV file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the summary command
pub fn handle_summary_command(
    store: &UserStore,
    settings: &Settings,
    args: SummaryArgs,
) -> MomuneyResult<()> {
    let filter = args.filter.into_filter(settings)?;
    let report = SummaryReport::generate(store.user(), &filter);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            MomuneyError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Summary exported to: {}", path.display());
        return Ok(());
    }

    print!("{}", report.format_terminal(&settings.currency_symbol));

    if !filter.is_empty() && report.empty_reason().is_none() {
        if report.same_categories(&store.user().categories) {
            println!("\nFilter(s) matched every transaction.");
        } else {
            println!("\nFilter(s) updated!");
        }
    }

    Ok(())
}
