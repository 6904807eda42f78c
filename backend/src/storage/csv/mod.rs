//! # CSV Storage Module
//!
//! File-based implementation of the [`crate::storage::traits::LedgerStore`]
//! capability. The ledger is one CSV file that is rewritten in full on every
//! mutation and swapped into place atomically.
//!
//! ## File Format
//!
//! ```csv
//! id,name,amount,timestamp
//! txn-1718200000000-af3c,Coffee,25.5,2025-06-13T09:00:00+00:00
//! txn-1718300000000-b210,Rent,2000,2025-06-14T10:00:00+00:00
//! ```

pub mod connection;
pub mod ledger_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use ledger_repository::LedgerRepository;
