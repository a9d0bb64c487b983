//! Transaction model
//!
//! A ledger entry: free-form description, signed minor-unit amount, and the
//! display-formatted date. Entries have no identity of their own; the ledger
//! addresses them by position and duplicates are permitted.

use serde::{Deserialize, Serialize};

use super::date::EntryDate;
use super::money::Money;

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-form description, non-empty after trimming
    pub description: String,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Display-formatted date
    pub date: EntryDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(description: impl Into<String>, amount: Money, date: EntryDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }

    /// Check if this is an income entry (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense entry (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}
