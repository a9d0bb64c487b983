//! Summary block rendering
//!
//! The three running totals of the ledger: income, expense, and balance,
//! each in the localized currency format.

use crate::config::Settings;
use crate::services::LedgerSummary;

/// Format the income / expense / balance block
pub fn format_summary(summary: &LedgerSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:10} {:>16}\n",
        "Income",
        settings.format_currency(summary.income)
    ));
    output.push_str(&format!(
        "{:10} {:>16}\n",
        "Expense",
        settings.format_currency(summary.expense)
    ));
    output.push_str(&"-".repeat(27));
    output.push('\n');
    output.push_str(&format!(
        "{:10} {:>16}\n",
        "Balance",
        settings.format_currency(summary.balance)
    ));

    output
}
