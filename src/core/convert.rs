//! Currency conversion into the reference currency
//!
//! [`RateTable`] is the in-process conversion collaborator: a fixed map of
//! currency code to ruble rate. [`convert_records`] applies any
//! [`CurrencyConverter`] to a list of records, producing converted copies and
//! leaving records it cannot convert as they were.

use crate::core::fields::{self, parse_amount, Amount};
use crate::core::traits::CurrencyConverter;
use crate::types::{Record, ViewerError};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;

/// Fixed exchange rates into rubles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ruble rate for `code`, replacing any previous rate
    pub fn insert(&mut self, code: &str, rate: Decimal) {
        self.rates.insert(code.trim().to_uppercase(), rate);
    }

    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.trim().to_uppercase()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Build a table from `CODE=RATE` specifications
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` for a spec without `=`, an empty code, or a rate
    /// that is not a positive number.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, ViewerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = RateTable::new();
        for spec in specs {
            let spec = spec.as_ref();
            let (code, rate) = spec
                .split_once('=')
                .ok_or_else(|| ViewerError::invalid_rate(spec))?;
            let rate = positive_rate(&Value::String(rate.to_string()))
                .ok_or_else(|| ViewerError::invalid_rate(spec))?;
            if code.trim().is_empty() {
                return Err(ViewerError::invalid_rate(spec));
            }
            table.insert(code, rate);
        }
        Ok(table)
    }

    /// Build a table from a JSON object such as `{"USD": 92.5, "EUR": "99,1"}`
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed JSON or a non-object document and
    /// `InvalidRate` for a rate that is not a positive number.
    pub fn from_json_str(document: &str) -> Result<Self, ViewerError> {
        let value: Value = serde_json::from_str(document)?;
        let Value::Object(entries) = value else {
            return Err(ViewerError::ParseError {
                line: None,
                message: "exchange rates must be a JSON object".to_string(),
            });
        };

        let mut table = RateTable::new();
        for (code, rate) in &entries {
            let rate = positive_rate(rate)
                .ok_or_else(|| ViewerError::invalid_rate(&format!("{}={}", code, rate)))?;
            table.insert(code, rate);
        }
        Ok(table)
    }

    /// Merge `other` into this table; rates in `other` win
    pub fn merge(&mut self, other: RateTable) {
        self.rates.extend(other.rates);
    }
}

fn positive_rate(value: &Value) -> Option<Decimal> {
    match parse_amount(value) {
        Amount::Parsed(rate) if rate > Decimal::ZERO => Some(rate),
        _ => None,
    }
}

impl CurrencyConverter for RateTable {
    fn to_reference(&self, amount: Decimal, code: &str) -> Option<Decimal> {
        if fields::is_ruble(code) {
            return Some(amount);
        }
        self.rate(code)?.checked_mul(amount)
    }
}

/// Attach reference-currency amounts to copies of the records
///
/// Records already in rubles, records with an unparseable amount, and records
/// the converter has no rate for are returned unchanged.
pub fn convert_records(records: &[Record], converter: &dyn CurrencyConverter) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            let info = fields::extract_amount(record);
            if fields::is_ruble(&info.code) {
                return record.clone();
            }
            info.amount
                .as_decimal()
                .and_then(|amount| converter.to_reference(amount, &info.code))
                .map(|converted| record.with_converted_amount(converted))
                .unwrap_or_else(|| record.clone())
        })
        .collect()
}
