//! Display formatting for terminal output

pub mod summary;
pub mod table;

pub use summary::format_summary;
pub use table::format_transaction_table;
