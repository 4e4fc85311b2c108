use thiserror::Error;

use crate::types::{AmountError, Year};

#[derive(Debug, Error, PartialEq)]
pub enum ContributionError {
    #[error("No published TFSA dollar limit for year [{year}]")]
    UnsupportedYear {
        year: Year
    },
    #[error("Contribution room for year [{year}] cannot be computed: {source}")]
    Amount {
        year: Year,
        source: AmountError
    }
}

impl ContributionError {
    pub fn overflow(year: Year) -> Self {
        Self::Amount {
            year,
            source: AmountError::Overflow
        }
    }
}
