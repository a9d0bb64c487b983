//! Ledger model
//!
//! The ordered collection of all transactions plus the derived aggregates
//! (total income, total expense, balance). Insertion order is the canonical
//! display order; entries are addressed by position. The aggregates are
//! recomputed from the full sequence on every call, which is fine at the
//! scale of a personal ledger.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::Transaction;

/// The ordered sequence of ledger entries
///
/// Also serves as the persisted document shape: the data file is this struct
/// serialized as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction at the end of the sequence
    ///
    /// No validation happens here; the form-handling path validates input
    /// before constructing the record. Persistence is the caller's job.
    pub fn append(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove the entry at the given 0-based position
    ///
    /// Returns the removed entry, or `None` if the position is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Transaction> {
        if index < self.transactions.len() {
            Some(self.transactions.remove(index))
        } else {
            None
        }
    }

    /// Sum of all amounts strictly greater than zero (always >= 0)
    pub fn total_income(&self) -> Money {
        self.transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| a.is_positive())
            .sum()
    }

    /// Sum of all amounts strictly less than zero (always <= 0)
    pub fn total_expense(&self) -> Money {
        self.transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| a.is_negative())
            .sum()
    }

    /// Net balance: total income plus total expense
    pub fn balance(&self) -> Money {
        self.total_income() + self.total_expense()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The entries in display order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
