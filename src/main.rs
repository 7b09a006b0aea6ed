//! Payment Gateway CLI
//!
//! Dispatches payments through the simulated wallet, card and bank backends.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --seed 7 --time-unit-ms 10
//! cargo run -- --log-file /var/log/payment.log requests.csv
//! ```
//!
//! Without a request script the three built-in sample payments are
//! dispatched. Every line goes to stdout and is appended to the log file.
//!
//! # Exit Codes
//!
//! - 0: The log sink was opened, whatever happened afterwards. Payment
//!   outcomes and an unreadable request script are reported in the log.
//! - 1: The log sink could not be opened (bad path or empty settings)

use payment_gateway::cli::{self, CliArgs};
use payment_gateway::io::init_logging;
use payment_gateway::{
    sample_requests, Gateway, GatewayConfig, GatewayError, LogSink, RunSummary, TracingSink,
};
use std::process;
use std::sync::Arc;

fn main() {
    let args = cli::parse_args();
    let config = args.to_gateway_config();

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the gateway inside a logging session
///
/// Only a failure to open the log sink is returned; everything after that
/// point is reported through the sink.
fn run(args: &CliArgs, config: &GatewayConfig) -> Result<RunSummary, GatewayError> {
    let _log = init_logging(&config.log)?;

    let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
    let gateway = Gateway::new(config, sink);

    let summary = match &args.requests {
        Some(path) => gateway.run_script_file(path),
        None => gateway.run(&sample_requests()),
    };

    tracing::info!("{}", summary);
    Ok(summary)
}
