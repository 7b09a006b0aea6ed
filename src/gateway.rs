//! Payment gateway
//!
//! Owns one processor per [`ProcessorKind`] and the [`Dispatcher`], and runs
//! sequences of requests through them one after another.

use crate::config::GatewayConfig;
use crate::core::{Dispatcher, LogSink, PaymentProcessor, Processor};
use crate::io::RequestReader;
use crate::types::{DispatchError, GatewayError, Outcome, PaymentRequest, ProcessorKind};
use rust_decimal::Decimal;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;

/// Counts of how a run of requests ended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub declined: usize,
    /// Requests that failed required-field validation
    pub invalid: usize,
    /// Requests stopped by the dispatcher before reaching a processor
    pub details_absent: usize,
    /// Script rows that could not be parsed and were never dispatched
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &Result<Outcome, DispatchError>) {
        match result {
            Ok(Outcome::Succeeded) => self.succeeded += 1,
            Ok(outcome) if outcome.is_declined() => self.declined += 1,
            Ok(_) => self.invalid += 1,
            Err(DispatchError::DetailsAbsent) => self.details_absent += 1,
        }
    }

    /// Number of requests handed to the dispatcher
    pub fn total(&self) -> usize {
        self.succeeded + self.declined + self.invalid + self.details_absent
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} payments: {} succeeded, {} declined, {} invalid, {} without details",
            self.total(),
            self.succeeded,
            self.declined,
            self.invalid,
            self.details_absent
        )?;
        if self.skipped > 0 {
            write!(f, "; {} rows skipped", self.skipped)?;
        }
        Ok(())
    }
}

/// Processor registry plus dispatcher
pub struct Gateway {
    /// Indexed by [`ProcessorKind::index`]
    processors: Vec<Box<dyn PaymentProcessor>>,
    dispatcher: Dispatcher,
    sink: Arc<dyn LogSink>,
}

impl Gateway {
    /// Build one processor per kind, all sharing `sink`
    pub fn new(config: &GatewayConfig, sink: Arc<dyn LogSink>) -> Self {
        let processors = ProcessorKind::ALL
            .iter()
            .map(|&kind| {
                Box::new(Processor::new(kind, Arc::clone(&sink), config))
                    as Box<dyn PaymentProcessor>
            })
            .collect();

        Gateway {
            processors,
            dispatcher: Dispatcher::new(Arc::clone(&sink)),
            sink,
        }
    }

    pub fn processor(&self, kind: ProcessorKind) -> &dyn PaymentProcessor {
        self.processors[kind.index()].as_ref()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Dispatch one request to the processor for its kind, log and return the result
    pub fn submit(&self, request: &PaymentRequest) -> Result<Outcome, DispatchError> {
        self.dispatcher
            .dispatch_request(self.processor(request.kind), request)
    }

    /// Dispatch every request in order and summarize the outcomes
    pub fn run<'a, I>(&self, requests: I) -> RunSummary
    where
        I: IntoIterator<Item = &'a PaymentRequest>,
    {
        let mut summary = RunSummary::default();
        for request in requests {
            summary.record(&self.submit(request));
        }
        summary
    }

    /// Dispatch parsed script rows in order, skipping rows that failed to parse
    ///
    /// Each skipped row is logged at warn level.
    pub fn run_script<I>(&self, rows: I) -> RunSummary
    where
        I: IntoIterator<Item = Result<PaymentRequest, GatewayError>>,
    {
        let mut summary = RunSummary::default();
        for row in rows {
            match row {
                Ok(request) => summary.record(&self.submit(&request)),
                Err(e) => {
                    self.sink
                        .emit(Level::WARN, &format!("Skipping request: {}", e));
                    summary.skipped += 1;
                }
            }
        }
        summary
    }

    /// Open a CSV request script and dispatch its rows
    ///
    /// A script that cannot be opened, or whose header is invalid, is logged
    /// at error level and yields an empty summary.
    pub fn run_script_file(&self, path: &Path) -> RunSummary {
        match RequestReader::open(path) {
            Ok(reader) => self.run_script(reader),
            Err(e) => {
                self.sink
                    .error(&format!("Error: Cannot read request script: {}", e));
                RunSummary::default()
            }
        }
    }
}

/// The built-in demonstration payments, one per backend
pub fn sample_requests() -> Vec<PaymentRequest> {
    vec![
        PaymentRequest::new(
            ProcessorKind::WalletTransfer,
            Decimal::new(100, 0),
            "USD",
            [("email", "test.99@mail.ru")],
        ),
        PaymentRequest::new(
            ProcessorKind::CardNetwork,
            Decimal::new(200, 0),
            "EUR",
            [("cardNumber", "1232131231231643")],
        ),
        PaymentRequest::new(
            ProcessorKind::BankTransfer,
            Decimal::new(300, 0),
            "RUB",
            [
                ("accountNumber", "923542523"),
                ("routingNumber", "1672734534"),
            ],
        ),
    ]
}
