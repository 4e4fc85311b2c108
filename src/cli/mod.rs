mod args;

pub use args::{CliArgs, LogLevel};

use clap::Parser;

/// Parses the process arguments, exiting with usage text on failure.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
