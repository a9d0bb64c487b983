//! CLI command handlers
//!
//! Bridges the clap argument parsing in main with the service layer. Each
//! handler prints its result for the terminal; errors bubble up to main.

use std::fs::File;
use std::io;

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_table};
use crate::error::{CentavoError, CentavoResult};
use crate::export::export_transactions_csv;
use crate::services::{AddEntryInput, LedgerService};
use crate::storage::Storage;

/// Handle `centavo add`
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    description: String,
    amount: String,
    date: String,
) -> CentavoResult<()> {
    let service = LedgerService::new(storage);

    let txn = service.add(AddEntryInput {
        description,
        amount,
        date,
    })?;

    println!("Added entry:");
    println!("  Description: {}", txn.description);
    println!("  Amount:      {}", settings.format_currency(txn.amount));
    println!("  Date:        {}", txn.date);

    Ok(())
}

/// Handle `centavo remove`
pub fn handle_remove(storage: &Storage, settings: &Settings, row: usize) -> CentavoResult<()> {
    let service = LedgerService::new(storage);

    let txn = service.remove(row)?;
    println!(
        "Removed entry {} ({} {})",
        row,
        txn.description,
        settings.format_currency(txn.amount)
    );

    Ok(())
}

/// Handle `centavo list`
///
/// Prints the table and the summary block together, so a single command
/// shows the whole state of the ledger.
pub fn handle_list(storage: &Storage, settings: &Settings) -> CentavoResult<()> {
    let service = LedgerService::new(storage);

    let ledger = service.ledger()?;
    print!("{}", format_transaction_table(&ledger, settings));

    if !ledger.is_empty() {
        println!();
        let summary = service.summary()?;
        print!("{}", format_summary(&summary, settings));
    }

    Ok(())
}

/// Handle `centavo summary`
pub fn handle_summary(storage: &Storage, settings: &Settings) -> CentavoResult<()> {
    let service = LedgerService::new(storage);

    let summary = service.summary()?;
    print!("{}", format_summary(&summary, settings));
    println!();
    println!("{} entries", summary.entries);

    Ok(())
}

/// Handle `centavo export`
pub fn handle_export(storage: &Storage, output: Option<String>) -> CentavoResult<()> {
    let service = LedgerService::new(storage);
    let ledger = service.ledger()?;

    match output {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| CentavoError::Export(format!("Failed to create {}: {}", path, e)))?;
            export_transactions_csv(&ledger, file)?;
            println!("Exported {} entries to {}", ledger.len(), path);
        }
        None => {
            export_transactions_csv(&ledger, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Handle `centavo config`
pub fn handle_config(storage: &Storage, settings: &Settings) -> CentavoResult<()> {
    let paths = storage.paths();

    println!("centavo configuration");
    println!("=====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data file:      {}", paths.transactions_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Thousands separator: {}", settings.thousands_separator);
    println!("  Decimal separator:   {}", settings.decimal_separator);

    Ok(())
}
