//! Payment request types
//!
//! A request is request-scoped data only: nothing here outlives a single
//! dispatch call.

use super::profile::ProcessorKind;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Credential fields keyed by name (`email`, `cardNumber`, ...)
///
/// Which keys must be present depends on the processor kind.
pub type PaymentDetails = HashMap<String, String>;

/// A single payment submission
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Backend the caller selected
    pub kind: ProcessorKind,

    /// Amount to transfer; never validated beyond presence
    pub amount: Decimal,

    /// Short currency code (`USD`, `EUR`, ...)
    pub currency: String,

    /// Credential fields, or `None` when the caller supplied no mapping at all
    pub details: Option<PaymentDetails>,
}

impl PaymentRequest {
    /// Create a request with the given detail pairs
    pub fn new<I, K, V>(kind: ProcessorKind, amount: Decimal, currency: &str, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PaymentRequest {
            kind,
            amount,
            currency: currency.to_string(),
            details: Some(
                details
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Create a request whose details mapping is absent
    pub fn without_details(kind: ProcessorKind, amount: Decimal, currency: &str) -> Self {
        PaymentRequest {
            kind,
            amount,
            currency: currency.to_string(),
            details: None,
        }
    }
}
