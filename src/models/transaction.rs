use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::TransactionType;
use crate::models::errors::TransactionError;
use crate::types::{Amount, AmountRecord};

/// A single dated contribution to, or withdrawal from, the account.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
    pub amount: Amount
}

/// The record shape produced by the statement scraper.
///
/// Fields are kept raw so that validation happens in exactly one place:
/// the conversion into a [`Transaction`].
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// ISO-8601 calendar date (`2009-06-01`).
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: AmountRecord
}

const ISO_DATE_LENGTH: usize = 10;

impl Transaction {
    pub fn new(date: NaiveDate, transaction_type: TransactionType, amount: Amount) -> Self {
        Self {
            date,
            transaction_type,
            amount
        }
    }

    /// Builds a transaction from the raw date and type strings, rejecting
    /// anything that is not an ISO-8601 date or a known transaction type.
    pub fn parse(date: &str, transaction_type: &str, amount: Amount) -> Result<Self, TransactionError> {
        Ok(Self::new(parse_iso_date(date)?, transaction_type.parse()?, amount))
    }
}

/// Accepts exactly `YYYY-MM-DD`. chrono alone would also take `2009-6-1`,
/// `+2009-06-01` and three digit years.
fn parse_iso_date(date: &str) -> Result<NaiveDate, TransactionError> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == ISO_DATE_LENGTH
        && bytes.iter().enumerate().all(|(position, byte)| match position {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit()
        });

    if !well_formed {
        return Err(TransactionError::invalid_date(date, "expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|error| TransactionError::invalid_date(date, error))
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Transaction::parse(&record.date, &record.transaction_type, Amount::try_from(record.amount)?)
    }
}
