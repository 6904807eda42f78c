use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, StringRecord, Writer};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::transaction::Transaction;
use crate::storage::traits::{LedgerStore, LoadError, SaveError};

/// CSV-backed ledger repository.
///
/// The whole ledger lives in one file; every save rewrites it completely.
#[derive(Clone)]
pub struct LedgerRepository {
    connection: CsvConnection,
}

impl LedgerRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the full ledger file. A missing file is a first run, not an
    /// error; a malformed row is corruption and fails the whole load so the
    /// service layer can apply its empty-ledger fallback.
    fn read_transactions(&self) -> Result<Vec<Transaction>> {
        let file_path = self.connection.ledger_file_path();
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut transactions = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            let transaction = Self::parse_record(&record)
                .with_context(|| format!("malformed ledger row {}", row + 1))?;
            transactions.push(transaction);
        }
        Ok(transactions)
    }

    fn parse_record(record: &StringRecord) -> Result<Transaction> {
        let id = record
            .get(0)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| anyhow!("missing id"))?
            .to_string();
        let name = record
            .get(1)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| anyhow!("missing name"))?
            .to_string();
        let amount: f64 = record
            .get(2)
            .ok_or_else(|| anyhow!("missing amount"))?
            .parse()
            .context("invalid amount")?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(anyhow!("non-positive amount {}", amount));
        }
        let timestamp = DateTime::parse_from_rfc3339(
            record.get(3).ok_or_else(|| anyhow!("missing timestamp"))?,
        )
        .context("invalid timestamp")?
        .with_timezone(&Utc);

        Ok(Transaction {
            id,
            name,
            amount,
            timestamp,
        })
    }

    /// Write the full sequence to a scratch file, then rename it over the
    /// live file so a crash mid-write never leaves a partial snapshot.
    fn write_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let file_path = self.connection.ledger_file_path();
        let scratch_path = file_path.with_extension("csv.tmp");

        {
            let file = File::create(&scratch_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(file));
            csv_writer.write_record(["id", "name", "amount", "timestamp"])?;
            for transaction in transactions {
                csv_writer.write_record(&[
                    &transaction.id,
                    &transaction.name,
                    &transaction.amount.to_string(),
                    &transaction.timestamp.to_rfc3339(),
                ])?;
            }
            csv_writer.flush()?;
        }

        fs::rename(&scratch_path, &file_path)?;
        Ok(())
    }
}

impl LedgerStore for LedgerRepository {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        Ok(self.read_transactions()?)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), SaveError> {
        Ok(self.write_transactions(transactions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    fn sample_transaction(id: &str, name: &str, amount: f64, rfc3339: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            name: name.to_string(),
            amount,
            timestamp: DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn missing_file_loads_as_empty_ledger() {
        let env = TestEnvironment::new().unwrap();
        let repository = LedgerRepository::new(env.connection.clone());
        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_exact_sequence() {
        let env = TestEnvironment::new().unwrap();
        let repository = LedgerRepository::new(env.connection.clone());

        let transactions = vec![
            sample_transaction("txn-2-0001", "Chai, With Biscuits", 15.0, "2025-06-14T10:00:00Z"),
            sample_transaction("txn-1-0000", "Coffee", 25.5, "2025-06-13T09:00:00Z"),
        ];
        repository.save(&transactions).unwrap();

        let loaded = repository.load().unwrap();
        assert_eq!(loaded, transactions);
    }

    #[test]
    fn save_replaces_the_previous_snapshot() {
        let env = TestEnvironment::new().unwrap();
        let repository = LedgerRepository::new(env.connection.clone());

        let first = vec![sample_transaction("txn-1-0000", "Coffee", 25.5, "2025-06-13T09:00:00Z")];
        repository.save(&first).unwrap();
        repository.save(&[]).unwrap();

        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_row_fails_the_load() {
        let env = TestEnvironment::new().unwrap();
        let repository = LedgerRepository::new(env.connection.clone());
        std::fs::write(
            env.connection.ledger_file_path(),
            "id,name,amount,timestamp\ntxn-1-0000,Coffee,not-a-number,2025-06-13T09:00:00Z\n",
        )
        .unwrap();

        assert!(repository.load().is_err());
    }

    #[test]
    fn non_positive_amount_is_treated_as_corruption() {
        let env = TestEnvironment::new().unwrap();
        let repository = LedgerRepository::new(env.connection.clone());
        std::fs::write(
            env.connection.ledger_file_path(),
            "id,name,amount,timestamp\ntxn-1-0000,Coffee,-5,2025-06-13T09:00:00Z\n",
        )
        .unwrap();

        assert!(repository.load().is_err());
    }

    #[test]
    fn no_scratch_file_is_left_behind_after_a_save() {
        let env = TestEnvironment::new().unwrap();
        let repository = LedgerRepository::new(env.connection.clone());
        repository
            .save(&[sample_transaction("txn-1-0000", "Coffee", 25.5, "2025-06-13T09:00:00Z")])
            .unwrap();

        let scratch = env.connection.ledger_file_path().with_extension("csv.tmp");
        assert!(!scratch.exists());
        assert!(env.connection.ledger_file_path().exists());
    }
}
