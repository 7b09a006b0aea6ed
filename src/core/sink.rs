//! Logging sink implementations
//!
//! - [`TracingSink`] forwards lines to `tracing`; the installed subscriber
//!   (see [`crate::io::log_file`]) decides where they end up.
//! - [`MemorySink`] records lines in memory so callers and tests can inspect
//!   exactly what was logged.

use crate::core::traits::LogSink;
use std::sync::{Mutex, PoisonError};
use tracing::Level;

/// Sink that forwards every line to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: Level, line: &str) {
        // tracing macros need the level at compile time
        if level == Level::ERROR {
            tracing::error!("{}", line);
        } else if level == Level::WARN {
            tracing::warn!("{}", line);
        } else if level == Level::INFO {
            tracing::info!("{}", line);
        } else if level == Level::DEBUG {
            tracing::debug!("{}", line);
        } else {
            tracing::trace!("{}", line);
        }
    }
}

/// A recorded log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub message: String,
}

/// Sink that keeps every line in memory
///
/// Writes are serialized through a mutex, so a single instance can be shared
/// between processors used from several threads.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<LogLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages without their levels
    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|line| line.message).collect()
    }

    /// True if any recorded message contains every one of `needles`
    pub fn contains_line_with(&self, needles: &[&str]) -> bool {
        self.lines()
            .iter()
            .any(|line| needles.iter().all(|needle| line.message.contains(needle)))
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, level: Level, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogLine {
                level,
                message: line.to_string(),
            });
    }
}
