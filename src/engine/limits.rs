use crate::engine::errors::ContributionError;
use crate::types::{Amount, Year};

/// The year the TFSA program opened.
pub const PROGRAM_START_YEAR: Year = 2009;

/// Age at which a resident starts accruing contribution room.
pub const MINIMUM_AGE: Year = 18;

/// Statutory annual dollar limit for `year`.
///
/// Years outside the published table are an error rather than an estimate.
pub fn dollar_limit_for_year(year: Year) -> Result<Amount, ContributionError> {
    let dollars = match year {
        2009..=2012 => 5_000,
        2013..=2014 => 5_500,
        2015 => 10_000,
        2016..=2018 => 5_500,
        2019..=2022 => 6_000,
        _ => return Err(ContributionError::UnsupportedYear { year })
    };

    Ok(Amount::from_dollars(dollars))
}
