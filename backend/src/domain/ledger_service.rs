//! Ledger service domain logic for the voice transaction logger.
//!
//! Owns the in-memory ledger sequence (newest first by construction) and
//! keeps the injected store synchronized: every mutation persists the
//! complete resulting sequence before returning.

use chrono::Utc;
use shared::{SortDirection, SortKey};
use std::cmp::Ordering;
use tracing::{info, warn};

use crate::domain::commands::transactions::{
    DeleteTransactionCommand, DeleteTransactionResult, TransactionListQuery,
};
use crate::domain::models::transaction::Transaction;
use crate::domain::parser::ParsedTransaction;
use crate::storage::traits::{LedgerStore, LoadError, SaveError};

pub struct LedgerService<S: LedgerStore> {
    store: S,
    transactions: Vec<Transaction>,
}

impl<S: LedgerStore> LedgerService<S> {
    /// Create a service over an injected store. The ledger starts empty;
    /// call [`LedgerService::initialize`] to load the persisted snapshot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            transactions: Vec::new(),
        }
    }

    /// Load the full persisted snapshot into memory, replacing whatever the
    /// service currently holds.
    ///
    /// A load failure is never fatal: the service falls back to an empty,
    /// fully usable ledger and returns the error so the caller can surface
    /// a non-blocking warning.
    pub fn initialize(&mut self) -> Result<usize, LoadError> {
        match self.store.load() {
            Ok(transactions) => {
                info!("loaded {} transactions from store", transactions.len());
                self.transactions = transactions;
                Ok(self.transactions.len())
            }
            Err(e) => {
                warn!("starting with an empty ledger: {e}");
                self.transactions.clear();
                Err(e)
            }
        }
    }

    /// Construct a transaction from a parsed candidate, prepend it to the
    /// sequence and persist.
    ///
    /// Id and timestamp assignment live here, not in the parser, and cannot
    /// fail. On a save failure the new entry stays in memory, ahead of the
    /// persisted snapshot; the next mutation writes the full sequence again.
    pub fn add(&mut self, candidate: ParsedTransaction) -> Result<Transaction, SaveError> {
        let timestamp = Utc::now();
        let transaction = Transaction {
            id: Transaction::generate_id(timestamp.timestamp_millis() as u64),
            name: candidate.name,
            amount: candidate.amount,
            timestamp,
        };

        self.transactions.insert(0, transaction.clone());
        self.store.save(&self.transactions)?;

        info!(
            "added transaction {} ({} {:.2})",
            transaction.id, transaction.name, transaction.amount
        );
        Ok(transaction)
    }

    /// Remove the transaction with the given id, if present. An unknown id
    /// leaves the sequence unchanged and is not an error.
    ///
    /// Persists unconditionally, which also flushes a sequence an earlier
    /// failed save left unwritten.
    pub fn delete(
        &mut self,
        command: DeleteTransactionCommand,
    ) -> Result<DeleteTransactionResult, SaveError> {
        let before = self.transactions.len();
        self.transactions
            .retain(|transaction| transaction.id != command.transaction_id);
        let deleted = self.transactions.len() < before;

        if !deleted {
            info!("delete requested for unknown id {}", command.transaction_id);
        }
        self.store.save(&self.transactions)?;

        let success_message = if deleted {
            "1 transaction deleted successfully".to_string()
        } else {
            "No transactions were deleted".to_string()
        };
        Ok(DeleteTransactionResult {
            deleted,
            success_message,
        })
    }

    /// Empty the ledger and persist the empty sequence. Irreversible; any
    /// confirmation step belongs to the caller, the service clears
    /// unconditionally.
    pub fn clear(&mut self) -> Result<(), SaveError> {
        self.transactions.clear();
        self.store.save(&self.transactions)?;
        info!("cleared all transactions");
        Ok(())
    }

    /// Freshly computed, stable-sorted snapshot of the ledger. Never
    /// mutates the stored insertion order; ties keep their original
    /// relative order.
    pub fn view(&self, query: TransactionListQuery) -> Vec<Transaction> {
        let mut view = self.transactions.clone();
        view.sort_by(|a, b| {
            let ordering = match query.sort_key {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
                SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
            };
            match query.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        view
    }

    /// The stored sequence, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::LedgerRepository;
    use crate::storage::memory::MemoryLedgerStore;
    use anyhow::anyhow;

    /// Store whose saves always fail, for exercising the in-memory-ahead
    /// policy.
    struct FailingStore;

    impl LedgerStore for FailingStore {
        fn load(&self) -> Result<Vec<Transaction>, LoadError> {
            Ok(Vec::new())
        }

        fn save(&self, _transactions: &[Transaction]) -> Result<(), SaveError> {
            Err(SaveError::from(anyhow!("disk unplugged")))
        }
    }

    fn candidate(name: &str, amount: f64) -> ParsedTransaction {
        ParsedTransaction {
            name: name.to_string(),
            amount,
        }
    }

    fn service_with_memory_store() -> LedgerService<MemoryLedgerStore> {
        let mut service = LedgerService::new(MemoryLedgerStore::new());
        service.initialize().unwrap();
        service
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut service = service_with_memory_store();
        service.add(candidate("Coffee", 25.0)).unwrap();
        service.add(candidate("Rent", 2000.0)).unwrap();

        let names: Vec<&str> = service
            .transactions()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rent", "Coffee"]);
    }

    #[test]
    fn view_by_timestamp_descending_places_newest_first() {
        let mut service = service_with_memory_store();
        service.add(candidate("Coffee", 25.0)).unwrap();
        service.add(candidate("Rent", 2000.0)).unwrap();

        let view = service.view(TransactionListQuery::default());
        assert_eq!(view[0].name, "Rent");
        assert_eq!(view[1].name, "Coffee");
    }

    #[test]
    fn view_sorts_by_name_and_amount_in_both_directions() {
        let mut service = service_with_memory_store();
        service.add(candidate("Coffee", 25.0)).unwrap();
        service.add(candidate("Auto", 120.0)).unwrap();
        service.add(candidate("Rent", 2000.0)).unwrap();

        let by_name = service.view(TransactionListQuery {
            sort_key: SortKey::Name,
            direction: SortDirection::Ascending,
        });
        let names: Vec<&str> = by_name.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Auto", "Coffee", "Rent"]);

        let by_amount = service.view(TransactionListQuery {
            sort_key: SortKey::Amount,
            direction: SortDirection::Descending,
        });
        let amounts: Vec<f64> = by_amount.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2000.0, 120.0, 25.0]);
    }

    #[test]
    fn view_is_non_destructive() {
        let mut service = service_with_memory_store();
        service.add(candidate("Coffee", 25.0)).unwrap();
        service.add(candidate("Auto", 120.0)).unwrap();

        let insertion_order: Vec<String> = service
            .transactions()
            .iter()
            .map(|t| t.id.clone())
            .collect();

        service.view(TransactionListQuery {
            sort_key: SortKey::Name,
            direction: SortDirection::Ascending,
        });
        service.view(TransactionListQuery {
            sort_key: SortKey::Amount,
            direction: SortDirection::Ascending,
        });

        let after: Vec<String> = service
            .transactions()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(after, insertion_order);
    }

    #[test]
    fn delete_removes_matching_transaction() {
        let mut service = service_with_memory_store();
        let kept = service.add(candidate("Coffee", 25.0)).unwrap();
        let removed = service.add(candidate("Rent", 2000.0)).unwrap();

        let result = service
            .delete(DeleteTransactionCommand {
                transaction_id: removed.id.clone(),
            })
            .unwrap();
        assert!(result.deleted);
        assert_eq!(service.len(), 1);
        assert_eq!(service.transactions()[0].id, kept.id);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop_not_an_error() {
        let mut service = service_with_memory_store();
        service.add(candidate("Coffee", 25.0)).unwrap();

        let result = service
            .delete(DeleteTransactionCommand {
                transaction_id: "txn-0-ffff".to_string(),
            })
            .unwrap();
        assert!(!result.deleted);
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn clear_then_restart_yields_an_empty_ledger() {
        let env = TestEnvironment::new().unwrap();

        let mut service = LedgerService::new(LedgerRepository::new(env.connection.clone()));
        service.initialize().unwrap();
        service.add(candidate("Coffee", 25.0)).unwrap();
        service.clear().unwrap();

        // Simulated restart over the same data directory.
        let mut restarted = LedgerService::new(LedgerRepository::new(env.connection.clone()));
        restarted.initialize().unwrap();
        assert!(restarted.is_empty());
    }

    #[test]
    fn restart_reconstructs_the_exact_sequence() {
        let env = TestEnvironment::new().unwrap();

        let mut service = LedgerService::new(LedgerRepository::new(env.connection.clone()));
        service.initialize().unwrap();
        service.add(candidate("Coffee", 25.5)).unwrap();
        service.add(candidate("Rent", 2000.0)).unwrap();
        let before: Vec<Transaction> = service.transactions().to_vec();

        let mut restarted = LedgerService::new(LedgerRepository::new(env.connection.clone()));
        restarted.initialize().unwrap();
        assert_eq!(restarted.transactions(), before.as_slice());
    }

    #[test]
    fn corrupt_snapshot_degrades_to_an_empty_usable_ledger() {
        let env = TestEnvironment::new().unwrap();
        std::fs::write(env.connection.ledger_file_path(), "definitely,not\na,ledger\n").unwrap();

        let mut service = LedgerService::new(LedgerRepository::new(env.connection.clone()));
        assert!(service.initialize().is_err());
        assert!(service.is_empty());

        // The ledger still works after the degraded start.
        service.add(candidate("Coffee", 25.0)).unwrap();
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn failed_save_leaves_memory_ahead_of_the_store() {
        let mut service = LedgerService::new(FailingStore);
        service.initialize().unwrap();

        assert!(service.add(candidate("Coffee", 25.0)).is_err());
        assert_eq!(service.len(), 1);
        assert_eq!(service.transactions()[0].name, "Coffee");
    }
}
