//! Transaction Viewer CLI
//!
//! Reads bank transactions from a JSON or CSV file, filters and sorts them,
//! masks card and account numbers, and prints a report to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.json
//! cargo run -- --status canceled --sort desc operations.json
//! cargo run -- --rub-only --search перевод transactions.csv
//! cargo run -- --categories --rate USD=92.5 --rate EUR=100 operations.json
//! cargo run -- --output json -v operations.json > report.json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success (including an empty selection)
//! - 1: Error (file not found, unreadable or malformed file, bad rates, etc.)

use std::process;
use tracing::error;
use txn_viewer::cli::{self, CliArgs};
use txn_viewer::core::CurrencyConverter;
use txn_viewer::pipeline;
use txn_viewer::ViewerError;

fn run(args: &CliArgs) -> Result<(), ViewerError> {
    let rates = args.to_rate_table()?;
    let converter = rates.as_ref().map(|table| table as &dyn CurrencyConverter);

    let mut output = std::io::stdout().lock();
    pipeline::process_file(
        &args.input_file,
        args.format,
        &args.to_report_options(),
        converter,
        args.output,
        &mut output,
    )?;

    Ok(())
}

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!(error = %e, "report failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
