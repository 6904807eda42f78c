//! # Domain Module
//!
//! Business logic for the voice transaction logger.
//!
//! The two load-bearing pieces are the transcript parser (pure, no I/O)
//! and the ledger service (owns the in-memory sequence, keeps the injected
//! store synchronized). Everything else is orchestration and formatting
//! around them.
//!
//! ## Module Organization
//!
//! - **parser**: transcript normalization and name/amount extraction
//! - **ledger_service**: add/delete/clear/view over the persisted sequence
//! - **voice_service**: transcript in, logged transaction + confirmation out
//! - **export_service**: delimited-text export of a ledger view
//! - **transaction_table**: display-ready row formatting
//! - **commands**: internal command/query structs used between services
//! - **models**: the domain `Transaction` entity

pub mod commands;
pub mod export_service;
pub mod ledger_service;
pub mod models;
pub mod parser;
pub mod transaction_table;
pub mod voice_service;

pub use export_service::{ExportFormat, ExportService};
pub use ledger_service::LedgerService;
pub use parser::TranscriptParser;
pub use transaction_table::TransactionTableService;
pub use voice_service::{SpeechSink, VoiceEntryService};
