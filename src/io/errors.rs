use std::path::PathBuf;

use thiserror::Error;

use crate::models::TransactionError;
use crate::types::AmountError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error opening transactions at path: {} | {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Unsupported transaction file '{}', expected a .json or .csv file", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV deserialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Transaction record [{index}] is invalid: {source}")]
    Record {
        index: usize,
        source: TransactionError
    },
    #[error("Transaction record [{index}] has an invalid amount: {source}")]
    Amount {
        index: usize,
        source: AmountError
    }
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }

    pub fn record(index: usize, source: TransactionError) -> Self {
        Self::Record { index, source }
    }

    pub fn amount(index: usize, source: AmountError) -> Self {
        Self::Amount { index, source }
    }
}
