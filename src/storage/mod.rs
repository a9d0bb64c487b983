//! Storage layer for centavo
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerRepository;

use crate::config::paths::CentavoPaths;
use crate::error::CentavoError;

/// Main storage coordinator
pub struct Storage {
    paths: CentavoPaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CentavoPaths) -> Result<Self, CentavoError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CentavoPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), CentavoError> {
        self.ledger.load()
    }
}
