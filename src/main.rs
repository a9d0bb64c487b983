use anyhow::Result;
use clap::{Parser, Subcommand};

use centavo::cli::{
    handle_add, handle_config, handle_export, handle_list, handle_remove, handle_summary,
};
use centavo::config::{CentavoPaths, Settings};
use centavo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "centavo",
    version,
    about = "Command-line personal finance ledger",
    long_about = "centavo is a personal finance ledger for the command line. \
                  Append income and expense entries, remove them by row, and \
                  keep an eye on your income, expense, and balance totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new entry to the ledger
    Add {
        /// Entry description
        description: String,
        /// Amount (e.g., "1250.00" for income, "-99.90" for expense)
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Entry date (YYYY-MM-DD)
        date: String,
    },

    /// Remove an entry by its row number (as printed by 'list')
    #[command(alias = "rm")]
    Remove {
        /// 1-based row number
        row: usize,
    },

    /// List all entries with the running totals
    #[command(alias = "ls")]
    List,

    /// Show the income / expense / balance totals
    Summary,

    /// Export all entries as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CentavoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and load the ledger once
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
            date,
        }) => {
            handle_add(&storage, &settings, description, amount, date)?;
        }
        Some(Commands::Remove { row }) => {
            handle_remove(&storage, &settings, row)?;
        }
        Some(Commands::List) => {
            handle_list(&storage, &settings)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&storage, &settings)?;
        }
        Some(Commands::Export { output }) => {
            handle_export(&storage, output)?;
        }
        Some(Commands::Config) => {
            handle_config(&storage, &settings)?;
        }
        None => {
            println!("centavo - command-line personal finance ledger");
            println!();
            println!("Run 'centavo --help' for usage information.");
            println!("Run 'centavo list' to see your ledger.");
        }
    }

    Ok(())
}
