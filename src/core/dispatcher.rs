//! Payment dispatcher
//!
//! The single entry point callers use. The dispatcher guards against an
//! absent details mapping, invokes the selected processor and turns the
//! outcome into a log line. Nothing is raised past this boundary: failures
//! are reported through the log and, for [`Dispatcher::dispatch`], through
//! the returned value.

use crate::core::traits::{LogSink, PaymentProcessor};
use crate::types::{DispatchError, Outcome, PaymentDetails, PaymentRequest};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Dispatches payments to processors and normalizes their reporting
pub struct Dispatcher {
    sink: Arc<dyn LogSink>,
}

impl Dispatcher {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Dispatcher { sink }
    }

    /// Dispatch a payment, log the result and return it
    ///
    /// # Arguments
    ///
    /// * `processor` - Backend selected by the caller
    /// * `amount` - Amount to transfer
    /// * `currency` - Short currency code
    /// * `details` - Credential fields; `None` means no mapping was supplied
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` - The processor ran; the outcome has been logged
    /// * `Err(DispatchError::DetailsAbsent)` - `details` was absent or empty
    ///   and the processor was never invoked
    pub fn dispatch(
        &self,
        processor: &dyn PaymentProcessor,
        amount: Decimal,
        currency: &str,
        details: Option<&PaymentDetails>,
    ) -> Result<Outcome, DispatchError> {
        let details = match details {
            Some(details) if !details.is_empty() => details,
            _ => {
                let error = DispatchError::DetailsAbsent;
                self.sink.error(&format!("Error: {}", error));
                return Err(error);
            }
        };

        let outcome = processor.process_payment(amount, currency, details);
        match &outcome {
            Outcome::Succeeded => self.sink.info("Payment processed successfully"),
            Outcome::Failed(reason) => self
                .sink
                .error(&format!("Error processing payment: {}", reason)),
        }

        Ok(outcome)
    }

    /// Dispatch a payment and report it through the log only
    pub fn make_payment(
        &self,
        processor: &dyn PaymentProcessor,
        amount: Decimal,
        currency: &str,
        details: Option<&PaymentDetails>,
    ) {
        // The log already carries the result
        let _ = self.dispatch(processor, amount, currency, details);
    }

    /// Dispatch a [`PaymentRequest`] to `processor`
    pub fn dispatch_request(
        &self,
        processor: &dyn PaymentProcessor,
        request: &PaymentRequest,
    ) -> Result<Outcome, DispatchError> {
        self.dispatch(
            processor,
            request.amount,
            &request.currency,
            request.details.as_ref(),
        )
    }
}
