//! Payment Gateway Library
//! # Overview
//!
//! This library dispatches payment requests to interchangeable backend
//! processors. Each backend validates its own credential fields, simulates a
//! variable-latency call, and settles on a probabilistic outcome; a single
//! dispatcher normalizes how results are logged and returned.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (requests, processor profiles, outcomes, errors)
//! - [`core`] - Business logic components:
//!   - [`core::processor`] - Generic processor driven by a per-backend profile
//!   - [`core::dispatcher`] - Dispatch entry point and result normalization
//!   - [`core::sink`] - Logging sink implementations
//! - [`gateway`] - Processor registry and sequential request runner
//! - [`io`] - Log file wiring and the CSV request script reader
//! - [`config`] / [`cli`] - Configuration and command-line parsing
//!
//! # Backends
//!
//! | Kind | Required fields | Success probability |
//! |---|---|---|
//! | Wallet Transfer | `email` | 0.8 |
//! | Card Network | `cardNumber` | 0.8 |
//! | Bank Transfer | `accountNumber`, `routingNumber` | 0.5 |
//!
//! # Outcomes
//!
//! Every processor call ends in exactly one of:
//! - **Succeeded**
//! - **Failed(MissingField)**: a required field was absent or empty
//! - **Failed(Declined)**: the simulated backend refused the payment
//!
//! The dispatcher additionally rejects requests whose details mapping is
//! absent or empty before any processor runs.

pub mod cli;
pub mod config;
pub mod core;
pub mod gateway;
pub mod io;
pub mod types;

pub use crate::config::{GatewayConfig, LogConfig};
pub use crate::core::{Dispatcher, LogSink, MemorySink, PaymentProcessor, Processor, TracingSink};
pub use crate::gateway::{sample_requests, Gateway, RunSummary};
pub use crate::types::{
    DispatchError, FailureReason, GatewayError, Outcome, PaymentDetails, PaymentRequest,
    ProcessorKind, ProcessorProfile,
};
