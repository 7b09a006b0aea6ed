//! Core business logic module
//!
//! This module contains the processor abstraction and dispatch logic:
//! - `traits` - The processor capability and the logging sink capability
//! - `processor` - Generic, profile-driven processor shared by all backends
//! - `dispatcher` - Single dispatch entry point with result normalization
//! - `sink` - Logging sink implementations (tracing-backed and in-memory)

pub mod dispatcher;
pub mod processor;
pub mod sink;
pub mod traits;

pub use dispatcher::Dispatcher;
pub use processor::Processor;
pub use sink::{LogLine, MemorySink, TracingSink};
pub use traits::{LogSink, PaymentProcessor};
