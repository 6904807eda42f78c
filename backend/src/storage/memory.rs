//! In-memory implementation of the ledger store, for tests and for hosts
//! that do not want anything written to disk.

use std::sync::Mutex;

use crate::domain::models::transaction::Transaction;
use crate::storage::traits::{LedgerStore, LoadError, SaveError};

/// Stores the snapshot in a mutex-guarded buffer. Every save replaces the
/// buffer wholesale, mirroring the durability contract of the file store.
#[derive(Default)]
pub struct MemoryLedgerStore {
    snapshot: Mutex<Vec<Transaction>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        Ok(self.snapshot.lock().expect("snapshot lock poisoned").clone())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), SaveError> {
        *self.snapshot.lock().expect("snapshot lock poisoned") = transactions.to_vec();
        Ok(())
    }
}
