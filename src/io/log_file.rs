//! Logging sink wiring
//!
//! Opens the persistent log file and installs a `tracing` subscriber that
//! writes every line to both the console and the file. Each line carries an
//! RFC 3339 timestamp with sub-second precision.
//!
//! The subscriber is scoped: [`init_logging`] returns a [`LogGuard`], and the
//! file is flushed and released when the guard is dropped, on every exit path.

use crate::config::LogConfig;
use crate::types::GatewayError;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Keeps the logging subscriber installed and the log file open
///
/// Dropping the guard uninstalls the subscriber and closes the file.
#[must_use = "logging stops when the guard is dropped"]
pub struct LogGuard {
    _subscriber: DefaultGuard,
    file: Arc<File>,
    path: PathBuf,
}

impl LogGuard {
    /// Path of the persistent log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        // Nothing useful can be done with a sync error at this point
        let _ = self.file.sync_all();
    }
}

/// Open the log file and install the console + file subscriber
///
/// The file is opened in create-or-append mode. The level filter comes from
/// `RUST_LOG` when set, otherwise from `config.log_level`.
///
/// The subscriber is the default for the calling thread only. Lines emitted
/// through `tracing` on any other thread are not written to either
/// destination, so processors must be driven from the thread that holds the
/// guard.
///
/// # Errors
///
/// Returns `GatewayError::LogSink` if the file cannot be opened and
/// `GatewayError::Config` if the settings are empty or the level filter is
/// invalid.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard, GatewayError> {
    config.validate()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| GatewayError::log_sink(&config.log_file, &e))?;
    let file = Arc::new(file);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| {
            GatewayError::config(format!("invalid log level '{}': {}", config.log_level, e))
        })?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::clone(&file)),
        );

    let subscriber_guard = tracing::subscriber::set_default(subscriber);
    tracing::debug!("log sink opened at {}", config.log_file.display());

    Ok(LogGuard {
        _subscriber: subscriber_guard,
        file,
        path: config.log_file.clone(),
    })
}
