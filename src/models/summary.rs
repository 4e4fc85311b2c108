use crate::models::{Transaction, TransactionType};
use crate::types::{Amount, AmountError};

/// Contribution and withdrawal totals for one scope, usually a calendar year.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct TransactionSummary {
    pub contributions: Amount,
    pub withdrawals: Amount
}

impl TransactionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the transaction's amount to the bucket matching its type.
    ///
    /// # Errors
    /// Returns `AmountError::Overflow` if the bucket's cent count would overflow;
    /// the summary is left unchanged.
    pub fn accumulate(&mut self, transaction: &Transaction) -> Result<&mut Self, AmountError> {
        let bucket = match transaction.transaction_type {
            TransactionType::Contribution => &mut self.contributions,
            TransactionType::Withdrawal => &mut self.withdrawals
        };

        *bucket = bucket.checked_add(transaction.amount).ok_or(AmountError::Overflow)?;

        Ok(self)
    }

    /// Contributions less withdrawals.
    pub fn net(&self) -> Amount {
        self.contributions - self.withdrawals
    }
}
