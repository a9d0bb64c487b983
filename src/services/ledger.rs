//! Ledger service
//!
//! Business logic for the ledger: validating raw user input, normalizing
//! amounts and dates, and persisting after every mutation. The ledger itself
//! performs no validation; everything user-entered is checked here before a
//! record is constructed.

use crate::error::{CentavoError, CentavoResult};
use crate::models::{EntryDate, Ledger, Money, Transaction};
use crate::storage::Storage;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

/// Raw user input for a new entry, as captured from the command line
#[derive(Debug, Clone)]
pub struct AddEntryInput {
    pub description: String,
    pub amount: String,
    pub date: String,
}

/// Derived aggregates for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    pub entries: usize,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, normalize, append, and persist a new entry
    ///
    /// All three fields must be non-empty after trimming. On any validation
    /// failure the ledger is left untouched.
    pub fn add(&self, input: AddEntryInput) -> CentavoResult<Transaction> {
        let description = input.description.trim();
        let amount = input.amount.trim();
        let date = input.date.trim();

        if description.is_empty() || amount.is_empty() || date.is_empty() {
            return Err(CentavoError::validation("Please fill in all fields"));
        }

        let amount = Money::parse(amount)
            .map_err(|e| CentavoError::Validation(e.to_string()))?;
        let date = EntryDate::from_iso(date)
            .map_err(|e| CentavoError::Validation(e.to_string()))?;

        let txn = Transaction::new(description, amount, date);

        self.storage.ledger.append(txn.clone())?;
        self.storage.ledger.save()?;

        Ok(txn)
    }

    /// Remove the entry at the given 1-based row and persist
    ///
    /// Rows are numbered as printed by the listing. Row 0 or a row past the
    /// end yields an error and the ledger is untouched.
    pub fn remove(&self, row: usize) -> CentavoResult<Transaction> {
        let len = self.storage.ledger.count()?;

        let removed = match row.checked_sub(1) {
            Some(index) => self.storage.ledger.remove_at(index)?,
            None => None,
        };

        let txn = removed.ok_or(CentavoError::EntryNotFound { row, len })?;

        self.storage.ledger.save()?;

        Ok(txn)
    }

    /// Compute the derived aggregates from the current ledger
    pub fn summary(&self) -> CentavoResult<LedgerSummary> {
        let ledger = self.storage.ledger.snapshot()?;
        Ok(LedgerSummary {
            income: ledger.total_income(),
            expense: ledger.total_expense(),
            balance: ledger.balance(),
            entries: ledger.len(),
        })
    }

    /// A snapshot of the current ledger, in display order
    pub fn ledger(&self) -> CentavoResult<Ledger> {
        self.storage.ledger.snapshot()
    }
}
