//! Error types for the payment gateway
//!
//! Payment failures are not errors in this sense: they are reported as an
//! [`Outcome`](super::Outcome) and resolved into log output at the
//! dispatcher. The types here cover the two remaining cases:
//!
//! - **Dispatch errors**: the request never reached a processor
//! - **Gateway errors**: startup and input problems (log sink, request file,
//!   configuration). Only a log sink failure stops the process.

use thiserror::Error;

/// Dispatcher-level guard failures
///
/// Distinct from a missing field: no processor was invoked and no specific
/// field is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The details mapping was absent or empty
    #[error("Payment details are missing")]
    DetailsAbsent,
}

/// Fatal and input-level errors raised outside the dispatch path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The log destination could not be opened
    ///
    /// This is the only error that halts the process.
    #[error("Failed to open log sink '{path}': {message}")]
    LogSink {
        /// Path of the log file
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// I/O error while reading a request script
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A request row could not be parsed
    ///
    /// Recoverable: the row is skipped and processing continues.
    #[error("Request parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Configuration rejected before startup
    #[error("Invalid configuration: {message}")]
    Config {
        /// What was wrong
        message: String,
    },
}

impl From<std::io::Error> for GatewayError {
    fn from(error: std::io::Error) -> Self {
        GatewayError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for GatewayError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        GatewayError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl GatewayError {
    /// Create a LogSink error
    pub fn log_sink(path: &std::path::Path, error: &std::io::Error) -> Self {
        GatewayError::LogSink {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        GatewayError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        GatewayError::Config {
            message: message.into(),
        }
    }
}
