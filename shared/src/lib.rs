use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ledger entry as seen by UI and export layers.
///
/// Transaction ID format: "txn-<epoch_millis>-<hex suffix>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Payee or item label, title-cased per word, never empty
    pub name: String,
    /// Transaction amount, always strictly positive
    pub amount: f64,
    /// Creation moment with timezone (RFC 3339)
    pub timestamp: String,
}

impl Transaction {
    /// Parse the RFC 3339 timestamp string back into a date-time value.
    /// Returns `None` for a malformed timestamp instead of panicking so
    /// display layers can fall back to the raw string.
    pub fn parsed_timestamp(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// Field a ledger view can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Amount,
    Timestamp,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Amount => write!(f, "amount"),
            SortKey::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Direction of a sorted ledger view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Request to log a finished speech transcript as a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogTranscriptRequest {
    /// The finished text output of a speech capture session
    pub transcript: String,
}

/// Response after successfully logging a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogTranscriptResponse {
    pub transaction: Transaction,
    /// Text handed to the speech synthesis layer for playback
    pub confirmation: String,
}

/// Request for a sorted, non-destructive view of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListRequest {
    /// Field to order by; defaults to timestamp when absent
    pub sort_key: Option<SortKey>,
    /// Defaults to descending (newest first) when absent
    pub direction: Option<SortDirection>,
}

/// Sorted snapshot of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

/// Request to delete a single transaction by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionRequest {
    pub transaction_id: String,
}

/// Response after a delete attempt; deleting an unknown id is not an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTransactionResponse {
    pub deleted: bool,
    pub success_message: String,
}

/// Represents a formatted transaction for display purposes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedTransaction {
    pub id: String,
    pub name: String,
    /// Amount rendered with currency symbol and two decimals, e.g. "₹250.00"
    pub formatted_amount: String,
    /// Timestamp rendered for table display, e.g. "13 Jun 2025, 02:30 PM"
    pub formatted_timestamp: String,
    pub raw_amount: f64,
    /// Original RFC 3339 timestamp, kept for re-sorting on the UI side
    pub raw_timestamp: String,
}

/// Generated export content plus metadata for the download layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub content: String,
    pub filename: String,
    pub transaction_count: usize,
}

/// Result of writing an export file to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub transaction_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_round_trips_through_json() {
        let transaction = Transaction {
            id: "txn-1718200000000-af3c".to_string(),
            name: "Coffee".to_string(),
            amount: 25.5,
            timestamp: "2025-06-13T14:30:00+05:30".to_string(),
        };
        let json = serde_json::to_string(&transaction).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transaction);
    }

    #[test]
    fn parsed_timestamp_handles_malformed_input() {
        let mut transaction = Transaction {
            id: "txn-1-0000".to_string(),
            name: "Chai".to_string(),
            amount: 15.0,
            timestamp: "2025-06-13T14:30:00+05:30".to_string(),
        };
        assert!(transaction.parsed_timestamp().is_some());

        transaction.timestamp = "not a date".to_string();
        assert!(transaction.parsed_timestamp().is_none());
    }
}
