use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    #[error("Invalid transaction date '{date}': {reason}")]
    InvalidDate {
        date: String,
        reason: String
    },
    #[error("Unknown transaction type '{0}', expected 'contribution' or 'withdrawal'")]
    UnknownType(String),
    #[error("Invalid transaction amount: {0}")]
    Amount(#[from] AmountError)
}

impl TransactionError {
    pub fn invalid_date(date: &str, reason: impl ToString) -> Self {
        Self::InvalidDate {
            date: date.to_string(),
            reason: reason.to_string()
        }
    }
}
