use std::io::{stderr, stdout, BufWriter, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use tfsa_room::{cli, load_history, Amount, Tfsa, YearReport};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse_args();

    setup_logging(args.log_level.into());

    let path = args.input_file.clone();
    let timer = Instant::now();
    let history = spawn_blocking(move || load_history(&path)).await??;
    let duration = timer.elapsed();

    info!("Loaded transaction history in: {duration:?}");

    let current_year = args.current_year();
    let account = Tfsa::new(args.date_of_birth, Arc::new(history));

    info!("Reporting years [{}] through [{current_year}]", account.first_eligible_year());

    let report = account.report(current_year)?;
    let total_gross = account.total_gross_contribution_room(current_year)?;

    write_report_to_stdout(&report, total_gross)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(report: &[YearReport], total_gross: Amount) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "year,limit,contributions,withdrawals,room,available")?;

    for row in report {
        writeln!(
            output,
            "{},{},{},{},{},{}",
            row.year,
            row.dollar_limit,
            row.summary.contributions,
            row.summary.withdrawals,
            row.contribution_room,
            row.available_room
        )?;
    }

    writeln!(output, "total_gross,{total_gross}")?;

    output.flush()?;

    Ok(())
}
