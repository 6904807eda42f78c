//! Transaction table formatting for the voice transaction logger.
//!
//! Turns raw transaction DTOs into display-ready rows: currency-symbol
//! amounts with two decimals and human date-times. Pure formatting logic,
//! independent of any UI framework; the raw values travel along so a UI can
//! re-sort without reparsing.

use chrono::Local;
use serde::{Deserialize, Serialize};

use shared::{FormattedTransaction, Transaction};

/// Configuration for transaction table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionTableConfig {
    pub currency_symbol: String,
    pub date_format: DateFormat,
}

/// Date formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    /// "13 Jun 2025, 02:30 PM"
    DayMonthYear,
    /// "06/13/2025"
    ShortDate,
    /// "2025-06-13 14:30"
    Iso,
}

impl Default for TransactionTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            date_format: DateFormat::DayMonthYear,
        }
    }
}

/// Transaction table service that handles all row formatting
#[derive(Clone)]
pub struct TransactionTableService {
    config: TransactionTableConfig,
}

impl TransactionTableService {
    pub fn new() -> Self {
        Self {
            config: TransactionTableConfig::default(),
        }
    }

    pub fn with_config(config: TransactionTableConfig) -> Self {
        Self { config }
    }

    /// Format a list of transactions for table display
    pub fn format_transactions_for_table(
        &self,
        transactions: &[Transaction],
    ) -> Vec<FormattedTransaction> {
        transactions
            .iter()
            .map(|transaction| self.format_single_transaction(transaction))
            .collect()
    }

    /// Format a single transaction for display
    pub fn format_single_transaction(&self, transaction: &Transaction) -> FormattedTransaction {
        FormattedTransaction {
            id: transaction.id.clone(),
            name: transaction.name.clone(),
            formatted_amount: self.format_amount(transaction.amount),
            formatted_timestamp: self.format_timestamp(transaction),
            raw_amount: transaction.amount,
            raw_timestamp: transaction.timestamp.clone(),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    /// Render the timestamp in local time per the configured format,
    /// falling back to the raw string when it does not parse.
    pub fn format_timestamp(&self, transaction: &Transaction) -> String {
        let Some(timestamp) = transaction.parsed_timestamp() else {
            return transaction.timestamp.clone();
        };
        let local = timestamp.with_timezone(&Local);
        match self.config.date_format {
            DateFormat::DayMonthYear => local.format("%d %b %Y, %I:%M %p").to_string(),
            DateFormat::ShortDate => local.format("%m/%d/%Y").to_string(),
            DateFormat::Iso => local.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl Default for TransactionTableService {
    fn default() -> Self {
        Self::new()
    }
}
