use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::types::Year;

/// Compute TFSA contribution room from a transaction history
#[derive(Parser, Debug)]
#[command(name = "tfsa-room")]
#[command(about = "Compute TFSA contribution room from a transaction history", long_about = None)]
pub struct CliArgs {
    /// Transaction history file (.json records or a .csv statement export)
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Account holder's date of birth
    #[arg(long = "date-of-birth", value_name = "YYYY-MM-DD")]
    pub date_of_birth: NaiveDate,

    /// Last year to report on (defaults to the current calendar year)
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<Year>,

    /// Logging verbosity, written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl CliArgs {
    pub fn current_year(&self) -> Year {
        self.year.unwrap_or_else(|| Local::now().year())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}
