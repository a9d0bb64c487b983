//! Business logic layer

pub mod ledger;

pub use ledger::{AddEntryInput, LedgerService, LedgerSummary};
