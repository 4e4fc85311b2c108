mod errors;
mod history;
mod summary;
mod transaction;

use std::str::FromStr;

pub use errors::TransactionError;
pub use history::TransactionHistory;
pub use summary::TransactionSummary;
pub use transaction::{Transaction, TransactionRecord};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionType {
    Contribution,
    Withdrawal
}

impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "contribution" => Ok(TransactionType::Contribution),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            other => Err(TransactionError::UnknownType(other.to_string()))
        }
    }
}
