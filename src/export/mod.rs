//! Export functionality

pub mod csv;

pub use self::csv::export_transactions_csv;
