//! TFSA contribution room.
//!
//! Given a holder's date of birth and their full transaction history, works out
//! how much contribution room they have in each year.
//!
//! - [`types`] - [`Amount`], an exact integer-cent monetary value
//! - [`models`] - transactions, per-year summaries and the sorted history
//! - [`engine`] - the statutory limit table and the carry-forward computation
//! - [`storage`] - the per-year memoization cache
//! - [`io`] - loading histories from JSON or CSV
//! - [`cli`] - command-line configuration

pub mod cli;
pub mod engine;
pub mod io;
pub mod models;
pub mod storage;
pub mod types;

pub use engine::{dollar_limit_for_year, ContributionError, Tfsa, YearReport};
pub use io::{load_history, LoadError};
pub use models::{Transaction, TransactionHistory, TransactionRecord, TransactionSummary, TransactionType};
pub use storage::{RoomCache, RoomStore};
pub use types::{Amount, AmountError, Year};
