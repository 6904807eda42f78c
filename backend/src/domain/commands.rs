//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The UI layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod transactions {
    use crate::domain::models::transaction::Transaction;
    use shared::{SortDirection, SortKey};

    /// Input for logging a finished speech transcript.
    #[derive(Debug, Clone)]
    pub struct LogTranscriptCommand {
        pub transcript: String,
    }

    /// Result of logging a transcript: the stored transaction plus the
    /// confirmation text handed to the speech playback layer.
    #[derive(Debug, Clone)]
    pub struct LogTranscriptResult {
        pub transaction: Transaction,
        pub confirmation: String,
    }

    /// Query parameters for a sorted, non-destructive ledger view.
    #[derive(Debug, Clone, Copy)]
    pub struct TransactionListQuery {
        pub sort_key: SortKey,
        pub direction: SortDirection,
    }

    impl Default for TransactionListQuery {
        /// Newest first, matching insertion order.
        fn default() -> Self {
            Self {
                sort_key: SortKey::Timestamp,
                direction: SortDirection::Descending,
            }
        }
    }

    /// Command for deleting a single transaction by id.
    #[derive(Debug, Clone)]
    pub struct DeleteTransactionCommand {
        pub transaction_id: String,
    }

    /// Result of a delete; an unknown id is a no-op, not an error.
    #[derive(Debug, Clone)]
    pub struct DeleteTransactionResult {
        pub deleted: bool,
        pub success_message: String,
    }
}
