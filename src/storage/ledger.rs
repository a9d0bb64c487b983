//! Ledger repository for JSON storage
//!
//! Manages loading and saving the ledger to transactions.json. The whole
//! document is read once at startup and fully rewritten on save; there are
//! no partial writes.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CentavoError;
use crate::models::{Ledger, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Ledger::new()),
        }
    }

    /// Load the ledger from disk
    ///
    /// A missing file loads as an empty ledger; a file that exists but does
    /// not parse is an error naming the file.
    pub fn load(&self) -> Result<(), CentavoError> {
        let ledger: Ledger = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CentavoError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = ledger;

        Ok(())
    }

    /// Save the ledger to disk
    pub fn save(&self) -> Result<(), CentavoError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentavoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Append a transaction to the in-memory ledger
    pub fn append(&self, txn: Transaction) -> Result<(), CentavoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CentavoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.append(txn);
        Ok(())
    }

    /// Remove the entry at the given 0-based position
    ///
    /// Returns the removed entry, or `None` if the position is out of range
    /// (in which case the ledger is untouched).
    pub fn remove_at(&self, index: usize) -> Result<Option<Transaction>, CentavoError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CentavoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove_at(index))
    }

    /// A snapshot of the current ledger
    pub fn snapshot(&self) -> Result<Ledger, CentavoError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentavoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Number of entries currently held
    pub fn count(&self) -> Result<usize, CentavoError> {
        let data = self
            .data
            .read()
            .map_err(|e| CentavoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDate, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = LedgerRepository::new(path);
        (temp_dir, repo)
    }

    fn txn(description: &str, cents: i64) -> Transaction {
        Transaction::new(
            description,
            Money::from_cents(cents),
            EntryDate::from_iso("2024-01-15").unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_snapshot() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(txn("Salary", 500_000)).unwrap();
        repo.append(txn("Rent", -120_000)).unwrap();

        let ledger = repo.snapshot().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance().cents(), 380_000);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(txn("Salary", 500_000)).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("transactions.json");
        let repo2 = LedgerRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let ledger = repo2.snapshot().unwrap();
        assert_eq!(ledger.transactions()[0].description, "Salary");
        assert_eq!(ledger.transactions()[0].amount.cents(), 500_000);
    }

    #[test]
    fn test_remove_at() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(txn("a", 100)).unwrap();
        repo.append(txn("b", 200)).unwrap();

        let removed = repo.remove_at(0).unwrap().unwrap();
        assert_eq!(removed.description, "a");
        assert_eq!(repo.count().unwrap(), 1);

        // Out of range leaves the ledger untouched
        assert!(repo.remove_at(5).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_document_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(&path, "{ definitely not a ledger").unwrap();

        let repo = LedgerRepository::new(path);
        assert!(repo.load().is_err());
    }
}
