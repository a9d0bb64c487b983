//! Transaction table rendering
//!
//! Formats the ledger for terminal display: one row per entry with its
//! 1-based row number (the number `remove` accepts), description, localized
//! amount, and date.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Ledger;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the ledger as a table
pub fn format_transaction_table(ledger: &Ledger, settings: &Settings) -> String {
    if ledger.is_empty() {
        return "No transactions yet. Add one with 'centavo add'.\n".to_string();
    }

    let rows: Vec<TransactionRow> = ledger
        .transactions()
        .iter()
        .enumerate()
        .map(|(i, txn)| TransactionRow {
            row: i + 1,
            description: txn.description.clone(),
            amount: settings.format_currency(txn.amount),
            date: txn.date.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{}\n", table)
}
