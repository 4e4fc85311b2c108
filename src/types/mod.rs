mod amount;
mod errors;

pub use amount::{Amount, AmountRecord};
pub use errors::AmountError;

/// A calendar (tax) year.
pub type Year = i32;
