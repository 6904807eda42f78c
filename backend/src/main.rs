//! Terminal driver for Mera Khata.
//!
//! Stands in for the capture and playback layers: every input line that is
//! not a command is treated as a finished speech transcript, and spoken
//! confirmations are printed instead of synthesized. The ledger, parser and
//! export logic underneath are exactly what a voice frontend would use.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::Level;

use mera_khata_backend::domain::commands::transactions::{
    DeleteTransactionCommand, LogTranscriptCommand, TransactionListQuery,
};
use mera_khata_backend::domain::{ExportFormat, SpeechSink};
use mera_khata_backend::Backend;
use shared::{SortDirection, SortKey};

/// Prints what the speech synthesis layer would say out loud.
struct ConsoleSpeech;

impl SpeechSink for ConsoleSpeech {
    fn speak(&self, text: &str) {
        println!("🔊 {}", text);
    }
}

const HELP: &str = "\
Speak (type) a transaction like \"coffee 25\" or \"rent two thousand\".
Commands:
  table                      show the ledger, newest first
  sort <name|amount|date> [asc|desc]
  delete <id>                remove one transaction
  clear                      remove everything (asks for confirmation)
  export [csv|excel] [dir]   write the current view to a file
  help                       show this text
  quit                       exit";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::WARN).init();

    let mut backend = match std::env::var("MERA_KHATA_DATA") {
        Ok(dir) => Backend::new(dir)?,
        Err(_) => Backend::new_default()?,
    };
    backend.voice_service.set_speech_sink(Box::new(ConsoleSpeech));

    println!("Mera Khata - voice-powered transaction logger");
    println!("{}", HELP);

    let stdin = io::stdin();
    loop {
        print!("mera-khata> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("quit") | Some("exit") => break,
            Some("help") => println!("{}", HELP),
            Some("table") => print_table(&backend, TransactionListQuery::default()),
            Some("sort") => match parse_sort(parts.next(), parts.next()) {
                Some(query) => print_table(&backend, query),
                None => println!("usage: sort <name|amount|date> [asc|desc]"),
            },
            Some("delete") => match parts.next() {
                Some(id) => {
                    match backend.voice_service.ledger_mut().delete(DeleteTransactionCommand {
                        transaction_id: id.to_string(),
                    }) {
                        Ok(result) => println!("{}", result.success_message),
                        Err(e) => println!("⚠️  {}", e),
                    }
                }
                None => println!("usage: delete <id>"),
            },
            Some("clear") => clear_with_confirmation(&mut backend, &stdin)?,
            Some("export") => export(&backend, parts.next(), parts.next()),
            _ => log_transcript(&mut backend, line),
        }
    }

    Ok(())
}

/// Every non-command line is a finished transcript.
fn log_transcript(backend: &mut Backend, transcript: &str) {
    match backend.voice_service.log_transcript(LogTranscriptCommand {
        transcript: transcript.to_string(),
    }) {
        Ok(result) => println!(
            "Logged {} - {}",
            result.transaction.id, result.confirmation
        ),
        // Parse and save failures are both recoverable: report and reprompt.
        Err(e) => println!("⚠️  {}", e),
    }
}

fn print_table(backend: &Backend, query: TransactionListQuery) {
    let view = backend.voice_service.ledger().view(query);
    if view.is_empty() {
        println!("No transactions yet");
        return;
    }

    let dtos: Vec<shared::Transaction> = view.iter().map(|t| t.to_dto()).collect();
    let rows = backend.table_service.format_transactions_for_table(&dtos);

    println!(
        "{:<28} {:<24} {:>12}  {}",
        "ID", "Name", "Amount", "Date & Time"
    );
    for row in &rows {
        println!(
            "{:<28} {:<24} {:>12}  {}",
            row.id, row.name, row.formatted_amount, row.formatted_timestamp
        );
    }
    println!(
        "Showing {} transaction{}",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    );
}

fn parse_sort(key: Option<&str>, direction: Option<&str>) -> Option<TransactionListQuery> {
    let sort_key = match key? {
        "name" => SortKey::Name,
        "amount" => SortKey::Amount,
        "date" | "timestamp" => SortKey::Timestamp,
        _ => return None,
    };
    let direction = match direction {
        Some("asc") => SortDirection::Ascending,
        Some("desc") | None => SortDirection::Descending,
        Some(_) => return None,
    };
    Some(TransactionListQuery {
        sort_key,
        direction,
    })
}

/// The clear operation is irreversible, so the confirmation gate lives
/// here at the caller, not inside the ledger service.
fn clear_with_confirmation(backend: &mut Backend, stdin: &io::Stdin) -> Result<()> {
    if backend.voice_service.ledger().is_empty() {
        println!("No transactions to clear");
        return Ok(());
    }

    print!("This cannot be undone. Clear all transactions? [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;

    if answer.trim().eq_ignore_ascii_case("y") {
        match backend.voice_service.ledger_mut().clear() {
            Ok(()) => println!("All transactions cleared"),
            Err(e) => println!("⚠️  {}", e),
        }
    } else {
        println!("Cancelled");
    }
    Ok(())
}

fn export(backend: &Backend, format: Option<&str>, dir: Option<&str>) {
    let format = match format {
        Some("excel") | Some("xlsx") => ExportFormat::Spreadsheet,
        Some("csv") | None => ExportFormat::Csv,
        Some(other) => {
            println!("unknown export format '{}', expected csv or excel", other);
            return;
        }
    };

    let view = backend
        .voice_service
        .ledger()
        .view(TransactionListQuery::default());
    let dtos: Vec<shared::Transaction> = view.iter().map(|t| t.to_dto()).collect();

    match backend.export_service.export_to_path(&dtos, format, dir) {
        Ok(result) => println!("{}", result.message),
        Err(e) => println!("⚠️  export failed: {}", e),
    }
}
