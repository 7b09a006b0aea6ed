//! CSV request script reader
//!
//! Streams [`PaymentRequest`]s from a CSV file. The first three columns are
//! fixed (`processor,amount,currency`); every further column names a detail
//! key:
//!
//! ```text
//! processor,amount,currency,email,cardNumber,accountNumber,routingNumber
//! wallet_transfer,100.00,USD,test.99@mail.ru,,,
//! bank_transfer,300.00,RUB,,,923542523,1672734534
//! card_network,200.00,EUR,,,,
//! ```
//!
//! Empty cells are left out of the details mapping. A row without any
//! non-empty detail cell yields `details: None`, which the dispatcher
//! rejects before any processor runs.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, bad header) are returned from the constructors
//! - Individual row errors are yielded as `Err` items with their line number

use crate::types::{GatewayError, PaymentDetails, PaymentRequest, ProcessorKind};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Column names that must lead the header row, in order
pub const FIXED_COLUMNS: [&str; 3] = ["processor", "amount", "currency"];

/// The fixed leading columns of a request row
///
/// Amount and currency are optional here so that a missing value is reported
/// with a precise message instead of a generic deserialization error.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FixedColumns {
    pub processor: String,
    pub amount: Option<String>,
    pub currency: Option<String>,
}

/// Convert one CSV row into a request
///
/// Pure function: `headers` supplies the detail keys for columns past the
/// fixed three.
///
/// # Errors
///
/// Returns `GatewayError::Parse` if the processor kind is unknown, the
/// amount is missing or malformed, or the currency is missing.
pub fn convert_record(
    headers: &StringRecord,
    record: &StringRecord,
    line: Option<u64>,
) -> Result<PaymentRequest, GatewayError> {
    // Only the leading cells, padded so short rows still deserialize
    let mut leading: StringRecord = record.iter().take(FIXED_COLUMNS.len()).collect();
    while leading.len() < FIXED_COLUMNS.len() {
        leading.push_field("");
    }
    let fixed_headers = StringRecord::from(FIXED_COLUMNS.to_vec());
    let fixed: FixedColumns = leading
        .deserialize(Some(&fixed_headers))
        .map_err(|e| GatewayError::parse(line, e.to_string()))?;

    let kind =
        ProcessorKind::from_str(&fixed.processor).map_err(|e| GatewayError::parse(line, e))?;

    let amount = match fixed.amount.as_deref().map(str::trim) {
        None | Some("") => return Err(GatewayError::parse(line, "Missing amount")),
        Some(raw) => Decimal::from_str(raw)
            .map_err(|_| GatewayError::parse(line, format!("Invalid amount '{}'", raw)))?,
    };

    let currency = match fixed.currency.as_deref().map(str::trim) {
        None | Some("") => return Err(GatewayError::parse(line, "Missing currency")),
        Some(raw) => raw.to_string(),
    };

    let field = |index: usize| record.get(index).unwrap_or("").trim();
    let details: PaymentDetails = headers
        .iter()
        .enumerate()
        .skip(FIXED_COLUMNS.len())
        .filter_map(|(index, key)| {
            let value = field(index);
            (!key.is_empty() && !value.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect();

    Ok(PaymentRequest {
        kind,
        amount,
        currency,
        details: (!details.is_empty()).then_some(details),
    })
}

/// Streaming reader over a CSV request script
#[derive(Debug)]
pub struct RequestReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl RequestReader<File> {
    /// Open a request script from a file path
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Io` if the file cannot be opened, or
    /// `GatewayError::Parse` if the header row is invalid.
    pub fn open(path: &Path) -> Result<Self, GatewayError> {
        let file = File::open(path).map_err(|e| GatewayError::Io {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;
        RequestReader::from_reader(file)
    }
}

impl<R: Read> RequestReader<R> {
    /// Wrap any reader; the header row is read and checked immediately
    pub fn from_reader(input: R) -> Result<Self, GatewayError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let leading: Vec<&str> = headers.iter().take(FIXED_COLUMNS.len()).collect();
        if leading != FIXED_COLUMNS {
            return Err(GatewayError::parse(
                Some(1),
                format!(
                    "Header must start with '{}', found '{}'",
                    FIXED_COLUMNS.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        Ok(RequestReader {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Detail keys declared by the header row
    pub fn detail_keys(&self) -> Vec<&str> {
        self.headers.iter().skip(FIXED_COLUMNS.len()).collect()
    }
}

impl<R: Read> Iterator for RequestReader<R> {
    type Item = Result<PaymentRequest, GatewayError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map(|pos| pos.line());
                Some(convert_record(&self.headers, &self.record, line))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
