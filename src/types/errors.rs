use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Amount error: {0} is not a finite dollar value")]
    NonFinite(f64),
    #[error("Amount error: Division by zero")]
    DivisionByZero,
    #[error("Amount error: Overflow")]
    Overflow
}
