//! Moneybox CLI
//!
//! Applies withdrawals and transfers from a CSV file to a set of accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv operations.csv > accounts_out.csv
//! cargo run -- --pay-in-limit 10000 accounts.csv operations.csv > accounts_out.csv
//! RUST_LOG=debug cargo run -- accounts.csv operations.csv > accounts_out.csv
//! ```
//!
//! Final account states go to stdout; logs and notifications go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use moneybox_engine::cli;
use moneybox_engine::{OperationProcessor, TracingNotificationService};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let processor = OperationProcessor::new(args.to_limits_config(), TracingNotificationService);

    let mut output = std::io::stdout();
    if let Err(e) = processor.process(&args.accounts_file, &args.operations_file, &mut output) {
        tracing::error!(error = %e, "Processing failed");
        process::exit(1);
    }
}
