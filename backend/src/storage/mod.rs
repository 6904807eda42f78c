//! # Storage Module
//!
//! Persistence for the ledger. The domain layer depends only on the
//! [`traits::LedgerStore`] abstraction; the CSV implementation is the
//! default medium and the in-memory implementation backs tests and
//! disk-less hosts. Either can be swapped without touching domain logic.

pub mod csv;
pub mod memory;
pub mod traits;

pub use self::csv::{CsvConnection, LedgerRepository};
pub use memory::MemoryLedgerStore;
pub use traits::{LedgerStore, LoadError, SaveError};
