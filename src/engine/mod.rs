mod errors;
mod limits;
mod tfsa;

pub use errors::ContributionError;
pub use limits::{dollar_limit_for_year, MINIMUM_AGE, PROGRAM_START_YEAR};
pub use tfsa::{Tfsa, YearReport};
