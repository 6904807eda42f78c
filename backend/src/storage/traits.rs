//! # Storage Traits
//!
//! Defines the persistence capability the ledger service is constructed
//! with. The domain layer only ever sees this trait, so the medium behind
//! it (CSV file, in-memory buffer, anything else) can be swapped without
//! touching ledger logic.

use crate::domain::models::transaction::Transaction;
use thiserror::Error;

/// The persisted snapshot could not be read or deserialized.
///
/// Non-fatal by contract: the ledger service degrades to an empty ledger
/// and surfaces this as a warning instead of failing startup.
#[derive(Debug, Error)]
#[error("failed to load persisted ledger: {0}")]
pub struct LoadError(#[from] anyhow::Error);

/// A persistence write failed.
///
/// The in-memory ledger may now be ahead of the persisted snapshot; the
/// next successful mutation writes the full sequence again.
#[derive(Debug, Error)]
#[error("failed to persist ledger: {0}")]
pub struct SaveError(#[from] anyhow::Error);

/// Injected persistence capability for the ledger service.
///
/// Every save durably replaces the previous snapshot with the complete
/// sequence, so a restart after any returned `Ok` reconstructs exactly the
/// sequence that was written. Callers never observe partial states.
pub trait LedgerStore: Send + Sync {
    /// Load the full persisted snapshot in stored (insertion) order.
    fn load(&self) -> Result<Vec<Transaction>, LoadError>;

    /// Durably write the complete sequence, replacing the previous snapshot.
    fn save(&self, transactions: &[Transaction]) -> Result<(), SaveError>;
}
