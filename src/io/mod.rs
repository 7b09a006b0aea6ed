//! I/O module
//!
//! Handles everything that touches files.
//!
//! # Components
//!
//! - `log_file` - Logging sink wiring (console + append-only log file)
//! - `request_reader` - CSV request script reader with iterator interface

pub mod log_file;
pub mod request_reader;

pub use log_file::{init_logging, LogGuard};
pub use request_reader::{convert_record, RequestReader};
