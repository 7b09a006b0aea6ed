//! Payment outcomes
//!
//! Every processor call ends in exactly one [`Outcome`]. Failures carry a
//! [`FailureReason`] whose `Display` text is the line written to the log.

use super::profile::{ProcessorKind, RequiredField};
use thiserror::Error;

/// Why a payment attempt failed
///
/// Neither reason is retryable within the gateway: a missing field must be
/// supplied in a new request, and a decline is a simulated business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// A required credential field was absent or empty
    #[error("Missing {} for {processor} payment", .field.description)]
    MissingField {
        processor: ProcessorKind,
        /// First missing field of the processor's profile, in declared order
        field: &'static RequiredField,
    },

    /// The backend declined an otherwise valid request
    #[error("{processor} payment failed due to insufficient funds or other reasons")]
    Declined { processor: ProcessorKind },
}

impl FailureReason {
    pub fn missing_field(processor: ProcessorKind, field: &'static RequiredField) -> Self {
        FailureReason::MissingField { processor, field }
    }

    pub fn declined(processor: ProcessorKind) -> Self {
        FailureReason::Declined { processor }
    }
}

/// Terminal result of one payment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(FailureReason),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }

    /// Details key of the missing field, if the attempt failed validation
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Outcome::Failed(FailureReason::MissingField { field, .. }) => Some(field.key),
            _ => None,
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Failed(FailureReason::Declined { .. }))
    }
}
