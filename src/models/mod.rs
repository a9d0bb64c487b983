//! Core data models for centavo
//!
//! This module contains the data structures that represent the ledger
//! domain: money amounts, entry dates, transactions, and the ledger itself.

pub mod date;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use date::{DateParseError, EntryDate};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
