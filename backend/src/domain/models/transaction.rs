//! Domain model for a ledger transaction.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single logged transaction. Immutable once constructed: entries are
/// created by the ledger service on a successful parse and only ever leave
/// the ledger through an explicit delete or clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Payee or item label, title-cased per word, never empty
    pub name: String,
    /// Strictly positive; displayed with two decimals
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Generate a unique transaction ID from the creation timestamp.
    /// Format: txn-<timestamp_ms>-<random_suffix>
    /// Example: txn-1625846400123-af3c
    pub fn generate_id(timestamp_ms: u64) -> String {
        let random_suffix = Self::generate_random_suffix(4);
        format!("txn-{}-{}", timestamp_ms, random_suffix)
    }

    /// Generate a random hex suffix for transaction IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }

    /// Map to the DTO shape crossing the UI/export boundary.
    pub fn to_dto(&self) -> shared::Transaction {
        shared::Transaction {
            id: self.id.clone(),
            name: self.name.clone(),
            amount: self.amount,
            timestamp: self.timestamp.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_carries_timestamp_and_suffix() {
        let id = Transaction::generate_id(1625846400123);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "txn");
        assert_eq!(parts[1], "1625846400123");
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn dto_mapping_keeps_values_and_rfc3339_timestamp() {
        let timestamp = DateTime::parse_from_rfc3339("2025-06-13T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let transaction = Transaction {
            id: "txn-1-0000".to_string(),
            name: "Coffee".to_string(),
            amount: 25.5,
            timestamp,
        };
        let dto = transaction.to_dto();
        assert_eq!(dto.id, "txn-1-0000");
        assert_eq!(dto.name, "Coffee");
        assert_eq!(dto.amount, 25.5);
        assert_eq!(dto.timestamp, "2025-06-13T09:00:00+00:00");
    }
}
