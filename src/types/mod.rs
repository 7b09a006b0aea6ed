//! Types module
//!
//! Contains core data structures used throughout the gateway.
//! This module organizes types into logical submodules:
//! - `profile`: Processor kinds and the static backend configuration table
//! - `request`: Payment requests and their credential details
//! - `outcome`: Payment outcomes and failure reasons
//! - `error`: Dispatch and gateway error types

pub mod error;
pub mod outcome;
pub mod profile;
pub mod request;

pub use error::{DispatchError, GatewayError};
pub use outcome::{FailureReason, Outcome};
pub use profile::{ProcessorKind, ProcessorProfile, RequiredField};
pub use request::{PaymentDetails, PaymentRequest};
