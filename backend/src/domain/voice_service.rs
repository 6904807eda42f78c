//! Voice entry orchestration: transcript in, logged transaction plus spoken
//! confirmation text out.
//!
//! The capture side (microphone, streaming recognition, end-of-speech
//! detection) lives outside this crate; by the time a transcript reaches
//! this service that lifecycle is resolved. Playback is just as external:
//! the service only produces the confirmation text and hands it to an
//! optional injected [`SpeechSink`].

use thiserror::Error;
use tracing::info;

use crate::domain::commands::transactions::{LogTranscriptCommand, LogTranscriptResult};
use crate::domain::ledger_service::LedgerService;
use crate::domain::parser::{ParseError, TranscriptParser};
use crate::storage::traits::{LedgerStore, SaveError};

/// Failure of a single voice entry attempt. Parse failures are
/// user-recoverable prompts to speak again; save failures left the new
/// entry in memory, ahead of the persisted snapshot.
#[derive(Debug, Error)]
pub enum VoiceEntryError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Sink for spoken confirmation text. Synthesis and playback live outside
/// this crate; the service only produces the text.
pub trait SpeechSink: Send + Sync {
    fn speak(&self, text: &str);
}

pub struct VoiceEntryService<S: LedgerStore> {
    parser: TranscriptParser,
    ledger: LedgerService<S>,
    speech: Option<Box<dyn SpeechSink>>,
}

impl<S: LedgerStore> VoiceEntryService<S> {
    pub fn new(parser: TranscriptParser, ledger: LedgerService<S>) -> Self {
        Self {
            parser,
            ledger,
            speech: None,
        }
    }

    pub fn with_speech_sink(
        parser: TranscriptParser,
        ledger: LedgerService<S>,
        speech: Box<dyn SpeechSink>,
    ) -> Self {
        Self {
            parser,
            ledger,
            speech: Some(speech),
        }
    }

    pub fn set_speech_sink(&mut self, speech: Box<dyn SpeechSink>) {
        self.speech = Some(speech);
    }

    /// Parse a finished transcript and append the extracted transaction to
    /// the ledger. A parse failure leaves the ledger untouched.
    pub fn log_transcript(
        &mut self,
        command: LogTranscriptCommand,
    ) -> Result<LogTranscriptResult, VoiceEntryError> {
        info!("🎤 processing transcript: \"{}\"", command.transcript);

        let candidate = self.parser.parse(&command.transcript)?;
        let transaction = self.ledger.add(candidate)?;

        let confirmation = format!(
            "Added {} with amount {}",
            transaction.name, transaction.amount
        );
        if let Some(speech) = &self.speech {
            speech.speak(&confirmation);
        }

        Ok(LogTranscriptResult {
            transaction,
            confirmation,
        })
    }

    pub fn ledger(&self) -> &LedgerService<S> {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut LedgerService<S> {
        &mut self.ledger
    }
}
