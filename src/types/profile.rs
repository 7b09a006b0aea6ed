//! Processor kinds and their static configuration table
//!
//! Every backend the gateway can dispatch to is described by a
//! [`ProcessorProfile`]: the credential fields it requires (in the order they
//! are checked), the probability that an otherwise valid payment succeeds,
//! and the wording used in its log lines.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::request::PaymentDetails;

/// Closed set of payment backends
///
/// The kind is always chosen by the caller; it is never inferred from the
/// shape of the payment details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorKind {
    /// E-mail addressed wallet transfer
    WalletTransfer,

    /// Card network charge
    CardNetwork,

    /// Account-to-account bank transfer
    BankTransfer,
}

impl ProcessorKind {
    /// All kinds in declaration order
    pub const ALL: [ProcessorKind; 3] = [
        ProcessorKind::WalletTransfer,
        ProcessorKind::CardNetwork,
        ProcessorKind::BankTransfer,
    ];

    /// Human-readable backend name used in log lines
    pub fn name(self) -> &'static str {
        match self {
            ProcessorKind::WalletTransfer => "Wallet Transfer",
            ProcessorKind::CardNetwork => "Card Network",
            ProcessorKind::BankTransfer => "Bank Transfer",
        }
    }

    /// Static profile for this kind
    pub fn profile(self) -> &'static ProcessorProfile {
        match self {
            ProcessorKind::WalletTransfer => &WALLET_TRANSFER,
            ProcessorKind::CardNetwork => &CARD_NETWORK,
            ProcessorKind::BankTransfer => &BANK_TRANSFER,
        }
    }

    /// Position of this kind in [`ProcessorKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            ProcessorKind::WalletTransfer => 0,
            ProcessorKind::CardNetwork => 1,
            ProcessorKind::BankTransfer => 2,
        }
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProcessorKind {
    type Err = String;

    /// Parse a kind from `wallet_transfer`, `card-network`, `BankTransfer`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "wallettransfer" => Ok(ProcessorKind::WalletTransfer),
            "cardnetwork" => Ok(ProcessorKind::CardNetwork),
            "banktransfer" => Ok(ProcessorKind::BankTransfer),
            _ => Err(format!("Unknown processor kind: '{}'", s)),
        }
    }
}

/// A credential field a processor requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    /// Key looked up in the payment details
    pub key: &'static str,

    /// Label used in the "Processing payment via ..." line
    pub label: &'static str,

    /// Lowercase description used in "Missing ... for ... payment"
    pub description: &'static str,
}

/// Per-kind configuration that parameterizes the generic processor
///
/// # Invariants
///
/// - `fields` is non-empty and fixed; validation walks it in order
/// - `success_probability` lies in `[0, 1]`
/// - the first field is the primary identifying field
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorProfile {
    pub kind: ProcessorKind,
    pub fields: &'static [RequiredField],
    pub success_probability: f64,
}

pub static WALLET_TRANSFER: ProcessorProfile = ProcessorProfile {
    kind: ProcessorKind::WalletTransfer,
    fields: &[RequiredField {
        key: "email",
        label: "Email",
        description: "email",
    }],
    success_probability: 0.8,
};

pub static CARD_NETWORK: ProcessorProfile = ProcessorProfile {
    kind: ProcessorKind::CardNetwork,
    fields: &[RequiredField {
        key: "cardNumber",
        label: "Card Number",
        description: "card number",
    }],
    success_probability: 0.8,
};

pub static BANK_TRANSFER: ProcessorProfile = ProcessorProfile {
    kind: ProcessorKind::BankTransfer,
    fields: &[
        RequiredField {
            key: "accountNumber",
            label: "Account",
            description: "account number",
        },
        RequiredField {
            key: "routingNumber",
            label: "Routing",
            description: "routing number",
        },
    ],
    success_probability: 0.5,
};

impl ProcessorProfile {
    /// The primary identifying field (first declared field)
    pub fn primary_field(&self) -> &'static RequiredField {
        &self.fields[0]
    }

    /// Look up a field by its details key
    pub fn field(&self, key: &str) -> Option<&'static RequiredField> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Return the first required field that is absent or empty in `details`
    pub fn first_missing_field(
        &self,
        details: &PaymentDetails,
    ) -> Option<&'static RequiredField> {
        self.fields
            .iter()
            .find(|field| details.get(field.key).is_none_or(|value| value.is_empty()))
    }

    /// Render the line logged when a payment attempt starts
    ///
    /// Every required field is listed in declared order; absent fields
    /// render as an empty value.
    pub fn describe_attempt(
        &self,
        amount: Decimal,
        currency: &str,
        details: &PaymentDetails,
    ) -> String {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                let value = details.get(field.key).map(String::as_str).unwrap_or("");
                format!("{}: {}", field.label, value)
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Processing payment via {}... Amount: {:.2} {}, {}",
            self.kind, amount, currency, fields
        )
    }

    /// Render the line logged when a payment succeeds
    pub fn describe_success(
        &self,
        amount: Decimal,
        currency: &str,
        details: &PaymentDetails,
    ) -> String {
        let primary = details
            .get(self.primary_field().key)
            .map(String::as_str)
            .unwrap_or("");
        format!(
            "{} payment successful: {:.2} {} to {}",
            self.kind, amount, currency, primary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn details(pairs: &[(&str, &str)]) -> PaymentDetails {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case::wallet(ProcessorKind::WalletTransfer, &["email"], 0.8)]
    #[case::card(ProcessorKind::CardNetwork, &["cardNumber"], 0.8)]
    #[case::bank(ProcessorKind::BankTransfer, &["accountNumber", "routingNumber"], 0.5)]
    fn test_profile_table(
        #[case] kind: ProcessorKind,
        #[case] keys: &[&str],
        #[case] probability: f64,
    ) {
        let profile = kind.profile();
        let actual: Vec<&str> = profile.fields.iter().map(|f| f.key).collect();
        assert_eq!(profile.kind, kind);
        assert_eq!(actual, keys);
        assert_eq!(profile.success_probability, probability);
        assert_eq!(profile.primary_field().key, keys[0]);
    }

    #[test]
    fn test_profiles_are_well_formed() {
        for kind in ProcessorKind::ALL {
            let profile = kind.profile();
            assert!(!profile.fields.is_empty());
            assert!((0.0..=1.0).contains(&profile.success_probability));
            assert_eq!(ProcessorKind::ALL[kind.index()], kind);
        }
    }

    #[rstest]
    #[case::snake("wallet_transfer", ProcessorKind::WalletTransfer)]
    #[case::kebab("card-network", ProcessorKind::CardNetwork)]
    #[case::pascal("BankTransfer", ProcessorKind::BankTransfer)]
    #[case::spaced(" Bank Transfer ", ProcessorKind::BankTransfer)]
    fn test_kind_from_str(#[case] input: &str, #[case] expected: ProcessorKind) {
        assert_eq!(input.parse::<ProcessorKind>().unwrap(), expected);
    }

    #[test]
    fn test_kind_from_str_rejects_unknown() {
        let err = "paypal".parse::<ProcessorKind>().unwrap_err();
        assert!(err.contains("paypal"));
    }

    #[rstest]
    #[case::all_present(&[("accountNumber", "1"), ("routingNumber", "2")], None)]
    #[case::second_missing(&[("accountNumber", "1")], Some("routingNumber"))]
    #[case::first_empty(&[("accountNumber", ""), ("routingNumber", "2")], Some("accountNumber"))]
    #[case::both_missing(&[], Some("accountNumber"))]
    fn test_first_missing_field_follows_declared_order(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: Option<&str>,
    ) {
        let missing = BANK_TRANSFER.first_missing_field(&details(pairs));
        assert_eq!(missing.map(|f| f.key), expected);
    }

    #[test]
    fn test_describe_attempt_lists_all_fields() {
        let line = BANK_TRANSFER.describe_attempt(
            Decimal::new(300, 0),
            "RUB",
            &details(&[("accountNumber", "923542523")]),
        );
        assert_eq!(
            line,
            "Processing payment via Bank Transfer... Amount: 300.00 RUB, Account: 923542523, Routing: "
        );
    }

    #[test]
    fn test_describe_success_uses_primary_field() {
        let line = WALLET_TRANSFER.describe_success(
            Decimal::new(10000, 2),
            "USD",
            &details(&[("email", "a@b.com")]),
        );
        assert_eq!(line, "Wallet Transfer payment successful: 100.00 USD to a@b.com");
    }
}
