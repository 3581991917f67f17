use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;

use momuney::cli::{
    handle_category_command, handle_export_command, handle_summary_command,
    handle_transaction_command, handle_vendor_command, CategoryCommands, ExportFormat,
    SummaryArgs, TransactionCommands, VendorCommands,
};
use momuney::config::{paths::MomuneyPaths, settings::Settings};
use momuney::storage::{initialize_storage, LoadOutcome, UserStore};

#[derive(Parser)]
#[command(
    name = "momuney",
    version,
    about = "Track your spending and see where the money goes",
    long_about = "Momuney records your expenses by category and vendor in a local \
                  JSON file and summarizes spending per category, with filters by \
                  date range and vendor name or location."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings and an empty data file
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Vendor directory commands
    #[command(subcommand)]
    Vendor(VendorCommands),

    /// Spending summary by category
    Summary(SummaryArgs),

    /// Export data to a file
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file path
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = MomuneyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Momuney at: {}", paths.base_dir().display());
            if initialize_storage(&paths, &settings)? {
                println!("Created {}", paths.user_data_file().display());
            } else {
                println!("Existing data kept at {}", paths.user_data_file().display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Momuney Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", paths.user_data_file().display());
            println!();
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
            match settings.default_search_field {
                Some(field) => println!("Search field:   {}", field),
                None => println!("Search field:   (none)"),
            }
            println!("List limit:     {}", settings.list_limit);
        }
        Some(Commands::Transaction(cmd)) => {
            let mut store = open_store(&paths)?;
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&open_store(&paths)?, &settings, cmd)?;
        }
        Some(Commands::Vendor(cmd)) => {
            handle_vendor_command(&open_store(&paths)?, &settings, cmd)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&open_store(&paths)?, &settings, args)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&open_store(&paths)?, format, output)?;
        }
        None => {
            println!("Momuney - personal spending tracker");
            println!();
            println!("Run 'momuney --help' for usage information.");
            println!("Run 'momuney init' to set up your data file.");
        }
    }

    Ok(())
}

/// Open the data file, noting when a fresh one had to be created
fn open_store(paths: &MomuneyPaths) -> Result<UserStore> {
    let store = UserStore::open(paths)?;
    if store.outcome() == LoadOutcome::Created {
        warn!("Started a new data file at {}", store.path().display());
    }
    Ok(store)
}
