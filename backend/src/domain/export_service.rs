//! Export service domain logic for the voice transaction logger.
//!
//! Renders an already-ordered ledger view as delimited text (comma
//! separated, or tab separated for spreadsheet apps) and optionally writes
//! it to disk. Pure formatting plus file orchestration; which view gets
//! exported is the caller's choice.

use anyhow::Result;
use chrono::{Local, Utc};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

use shared::{ExportDataResponse, ExportToPathResponse, Transaction};

/// Delimited text format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma separated values
    Csv,
    /// Tab separated with a spreadsheet extension; desktop spreadsheet apps
    /// open it directly
    Spreadsheet,
}

impl ExportFormat {
    fn delimiter(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Spreadsheet => '\t',
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Spreadsheet => "xlsx",
        }
    }
}

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    pub fn new() -> Self {
        Self {}
    }

    /// Render an ordered view of the ledger as delimited text.
    ///
    /// Header and row shape: `Name,Amount,Date & Time`, amounts with two
    /// decimals, the date-time quoted and rendered in local time.
    pub fn export_transactions(
        &self,
        transactions: &[Transaction],
        format: ExportFormat,
    ) -> ExportDataResponse {
        let delimiter = format.delimiter();
        let mut content = String::new();

        content.push_str(&format!(
            "Name{}Amount{}Date & Time\n",
            delimiter, delimiter
        ));
        for transaction in transactions {
            content.push_str(&format!(
                "\"{}\"{}{:.2}{}\"{}\"\n",
                transaction.name.replace('"', "\"\""),
                delimiter,
                transaction.amount,
                delimiter,
                format_export_timestamp(transaction),
            ));
        }

        let filename = format!(
            "mera-khata-transactions-{}.{}",
            Utc::now().format("%Y%m%d"),
            format.extension()
        );
        info!(
            "📄 EXPORT: generated {} rows ({} bytes) as {}",
            transactions.len(),
            content.len(),
            filename
        );

        ExportDataResponse {
            content,
            filename,
            transaction_count: transactions.len(),
        }
    }

    /// Generate the export and write it under `custom_path`, or under the
    /// user's Documents folder (home directory fallback) when no path is
    /// given.
    pub fn export_to_path(
        &self,
        transactions: &[Transaction],
        format: ExportFormat,
        custom_path: Option<&str>,
    ) -> Result<ExportToPathResponse> {
        let export = self.export_transactions(transactions, format);

        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("📄 EXPORT: could not determine an export directory");
                    return Ok(ExportToPathResponse {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        transaction_count: 0,
                    });
                }
            },
        };

        let file_path = export_dir.join(&export.filename);
        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!(
                "📄 EXPORT: failed to create export directory {:?}: {}",
                export_dir, e
            );
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                transaction_count: 0,
            });
        }

        match fs::write(&file_path, &export.content) {
            Ok(()) => {
                let file_path = file_path.to_string_lossy().to_string();
                info!(
                    "📄 EXPORT: wrote {} transactions to {}",
                    export.transaction_count, file_path
                );
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path),
                    file_path,
                    transaction_count: export.transaction_count,
                })
            }
            Err(e) => {
                error!("📄 EXPORT: failed to write {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    transaction_count: 0,
                })
            }
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Local-time rendering for export rows, falling back to the raw string
/// when the stored timestamp does not parse.
fn format_export_timestamp(transaction: &Transaction) -> String {
    match transaction.parsed_timestamp() {
        Some(timestamp) => timestamp
            .with_timezone(&Local)
            .format("%d %b %Y, %I:%M %p")
            .to_string(),
        None => transaction.timestamp.clone(),
    }
}
