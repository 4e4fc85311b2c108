use chrono::Datelike;
use std::collections::BTreeSet;
use std::slice::Iter;

use crate::models::{Transaction, TransactionSummary, TransactionType};
use crate::types::{Amount, AmountError, Year};

/// An account's transactions in ascending date order.
///
/// Sorting is stable, so transactions sharing a date keep their input order.
#[derive(Debug, Clone, Default)]
pub struct TransactionHistory {
    transactions: Vec<Transaction>
}

impl TransactionHistory {
    pub fn new(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let mut transactions: Vec<Transaction> = transactions.into_iter().collect();
        transactions.sort_by_key(|transaction| transaction.date);

        Self { transactions }
    }

    /// Totals for every transaction dated in `year`. Built fresh on each call.
    pub fn year_summary(&self, year: Year) -> Result<TransactionSummary, AmountError> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.date.year() == year)
            .try_fold(TransactionSummary::new(), |mut summary, transaction| {
                summary.accumulate(transaction)?;
                Ok(summary)
            })
    }

    pub fn contributions(&self) -> Vec<Amount> {
        self.amounts_of(TransactionType::Contribution)
    }

    pub fn withdrawals(&self) -> Vec<Amount> {
        self.amounts_of(TransactionType::Withdrawal)
    }

    /// Distinct years that have at least one transaction, ascending.
    pub fn years(&self) -> Vec<Year> {
        self.transactions
            .iter()
            .map(|transaction| transaction.date.year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn amounts_of(&self, transaction_type: TransactionType) -> Vec<Amount> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == transaction_type)
            .map(|transaction| transaction.amount)
            .collect()
    }
}

impl FromIterator<Transaction> for TransactionHistory {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a TransactionHistory {
    type Item = &'a Transaction;
    type IntoIter = Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
