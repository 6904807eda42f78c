//! # Mera Khata backend
//!
//! Core crate for a voice-driven personal transaction logger: a finished
//! speech transcript goes in, a parsed transaction lands in a locally
//! persisted ledger that can be viewed, sorted, deleted, cleared and
//! exported.
//!
//! Capture (microphone, recognition, end-of-speech detection), speech
//! playback and visual rendering live outside this crate; the seams for
//! them are the transcript string, the [`domain::SpeechSink`] trait and
//! the DTOs in the `shared` crate.

use anyhow::Result;
use std::path::Path;
use tracing::warn;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

use domain::ledger_service::LedgerService;
use domain::parser::TranscriptParser;
use domain::{ExportService, TransactionTableService, VoiceEntryService};
use storage::csv::LedgerRepository;

/// Main backend struct that wires the parser, ledger and collaborator
/// services over CSV storage.
pub struct Backend {
    pub voice_service: VoiceEntryService<LedgerRepository>,
    pub table_service: TransactionTableService,
    pub export_service: ExportService,
}

impl Backend {
    /// Backend rooted at an explicit data directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Self::with_connection(CsvConnection::new(data_dir)?)
    }

    /// Backend over the default data directory (`~/Documents/Mera Khata`).
    pub fn new_default() -> Result<Self> {
        Self::with_connection(CsvConnection::new_default()?)
    }

    fn with_connection(connection: CsvConnection) -> Result<Self> {
        let repository = LedgerRepository::new(connection);
        let mut ledger_service = LedgerService::new(repository);
        // A corrupt snapshot degrades to an empty ledger; startup proceeds.
        if let Err(e) = ledger_service.initialize() {
            warn!("{e}");
        }
        let voice_service = VoiceEntryService::new(TranscriptParser::new(), ledger_service);

        Ok(Backend {
            voice_service,
            table_service: TransactionTableService::new(),
            export_service: ExportService::new(),
        })
    }
}
