use crate::config::{GatewayConfig, LogConfig, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Dispatch simulated payments to wallet, card and bank backends
#[derive(Parser, Debug)]
#[command(name = "payment-gateway")]
#[command(about = "Dispatch simulated payments to wallet, card and bank backends", long_about = None)]
pub struct CliArgs {
    /// Optional CSV request script; the built-in sample payments run when omitted
    #[arg(value_name = "REQUESTS", help = "Path to a CSV file of payment requests")]
    pub requests: Option<PathBuf>,

    /// Persistent log file, opened in create-or-append mode
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Log file to append to"
    )]
    pub log_file: PathBuf,

    /// Level filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level filter (error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    /// Length of one simulated latency unit in milliseconds
    #[arg(
        long = "time-unit-ms",
        value_name = "MILLIS",
        default_value_t = 1000,
        help = "Milliseconds per simulated latency unit (each payment waits 1-3 units)"
    )]
    pub time_unit_ms: u64,

    /// Seed for reproducible outcomes
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed the outcome generators for reproducible runs"
    )]
    pub seed: Option<u64>,
}

impl CliArgs {
    /// Build the gateway configuration from the parsed arguments
    pub fn to_gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            log: LogConfig {
                log_file: self.log_file.clone(),
                log_level: self.log_level.clone(),
            },
            time_unit: Duration::from_millis(self.time_unit_ms),
            seed: self.seed,
        }
    }
}
