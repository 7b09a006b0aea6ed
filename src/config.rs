//! Gateway configuration
//!
//! Built from command-line arguments by [`crate::cli::CliArgs::to_gateway_config`]
//! or constructed directly by embedders and tests.

use crate::types::GatewayError;
use std::path::PathBuf;
use std::time::Duration;

/// Default log file, opened in create-or-append mode
pub const DEFAULT_LOG_FILE: &str = "payment.log";

/// Default log level when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default length of one simulated latency unit
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);

/// Settings for the logging sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Persistent append-only destination
    pub log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl LogConfig {
    /// Check the settings before the sink is opened
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Config` if the log file path or log level is empty.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.log_file.as_os_str().is_empty() {
            return Err(GatewayError::config("log file path is empty"));
        }
        if self.log_level.trim().is_empty() {
            return Err(GatewayError::config("log level is empty"));
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Settings for the whole gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub log: LogConfig,

    /// Length of one simulated latency unit; each call sleeps 1 to 3 units
    pub time_unit: Duration,

    /// Seed for the per-processor generators
    ///
    /// When set, processor `i` (in [`ProcessorKind::ALL`](crate::types::ProcessorKind::ALL)
    /// order) is seeded with `seed + i`. When unset, each generator is seeded
    /// from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            log: LogConfig::default(),
            time_unit: DEFAULT_TIME_UNIT,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.log.log_file, PathBuf::from("payment.log"));
        assert_eq!(config.log.log_level, "info");
        assert_eq!(config.time_unit, Duration::from_secs(1));
        assert_eq!(config.seed, None);
        assert!(config.log.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_log_file() {
        let mut config = GatewayConfig::default();
        config.log.log_file = PathBuf::new();
        assert!(matches!(
            config.log.validate(),
            Err(GatewayError::Config { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_log_level() {
        let mut config = GatewayConfig::default();
        config.log.log_level = "  ".to_string();
        assert!(config.log.validate().is_err());
    }
}
