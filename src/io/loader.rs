use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::io::errors::LoadError;
use crate::models::{Transaction, TransactionHistory, TransactionRecord};
use crate::types::Amount;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputFormat {
    Json,
    Csv
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf()))
        }
    }
}

/// A statement row: `date,type,amount` with the amount as printed (`$2,000.00`).
#[derive(Debug, Deserialize)]
struct CsvRecord {
    date: String,
    #[serde(rename = "type")]
    transaction_type: String,
    amount: String
}

/// Reads a transaction file and builds the date-ordered history.
///
/// The first malformed record aborts the load; nothing is skipped.
pub fn load_history(path: &Path) -> Result<TransactionHistory, LoadError> {
    let format = InputFormat::from_path(path)?;
    let file = File::open(path).map_err(|error| LoadError::io(path, error))?;
    let reader = BufReader::new(file);

    let transactions = match format {
        InputFormat::Json => read_json(reader)?,
        InputFormat::Csv => read_csv(reader)?
    };

    info!("Loaded [{}] transactions from {}", transactions.len(), path.display());

    Ok(TransactionHistory::new(transactions))
}

/// Parses a JSON array of `{ date, type, amount: { dollars, cents } }` records.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let records: Vec<TransactionRecord> = serde_json::from_reader(reader)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Transaction::try_from(record).map_err(|error| LoadError::record(index, error)))
        .collect()
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<CsvRecord>()
        .enumerate()
        .map(|(index, result)| {
            let record = result?;
            let amount = Amount::from_str(&record.amount).map_err(|error| LoadError::amount(index, error))?;

            Transaction::parse(&record.date, &record.transaction_type, amount)
                .map_err(|error| LoadError::record(index, error))
        })
        .collect()
}
