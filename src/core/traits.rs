//! Core traits for payment processors and the logging sink
//!
//! These are the two seams of the gateway: every backend implements
//! [`PaymentProcessor`], and every processor and the dispatcher write through
//! a shared [`LogSink`] capability.

use crate::types::{Outcome, PaymentDetails, ProcessorKind};
use rust_decimal::Decimal;
use tracing::Level;

/// Capability contract implemented by every payment backend
///
/// Implementations must not mutate `details` and must return exactly one
/// [`Outcome`] per call. The dispatcher only ever calls this with a
/// non-empty details mapping.
pub trait PaymentProcessor: Send + Sync {
    /// Which backend this processor represents
    fn kind(&self) -> ProcessorKind;

    /// Attempt a single payment
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount to transfer
    /// * `currency` - Short currency code
    /// * `details` - Credential fields for this backend
    ///
    /// # Returns
    ///
    /// `Outcome::Succeeded`, or `Outcome::Failed` with the reason
    fn process_payment(&self, amount: Decimal, currency: &str, details: &PaymentDetails)
        -> Outcome;
}

/// Append-only destination for formatted log lines
///
/// A sink is shared by reference between all processors and the dispatcher,
/// so `emit` must be safe under concurrent invocation.
pub trait LogSink: Send + Sync {
    /// Write one line at the given level
    fn emit(&self, level: Level, line: &str);

    fn info(&self, line: &str) {
        self.emit(Level::INFO, line);
    }

    fn error(&self, line: &str) {
        self.emit(Level::ERROR, line);
    }
}
