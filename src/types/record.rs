//! Transaction record types
//!
//! A [`Record`] wraps the loosely-typed field map produced by ingestion. The
//! shape is not normalised up front; field extraction happens on demand in
//! [`crate::core::fields`] so that whatever the source provided is still
//! available to every stage.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Raw field map of a single transaction as read from a file
pub type RawFields = Map<String, Value>;

/// Status vocabulary accepted by the status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Executed,
    Canceled,
    Pending,
}

impl Status {
    /// All statuses, in the order they are offered to the user
    pub const ALL: [Status; 3] = [Status::Executed, Status::Canceled, Status::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Executed => "EXECUTED",
            Status::Canceled => "CANCELED",
            Status::Pending => "PENDING",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown status '{}' (expected one of: EXECUTED, CANCELED, PENDING)",
                    s
                )
            })
    }
}

/// One transaction flowing through the report pipeline
///
/// Records are never modified by filtering or sorting. Currency conversion
/// attaches its result to a copy via [`Record::with_converted_amount`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: RawFields,

    /// Amount in the reference currency, set only by the conversion stage
    converted_amount: Option<Decimal>,
}

impl Record {
    pub fn new(fields: RawFields) -> Self {
        Record {
            fields,
            converted_amount: None,
        }
    }

    /// Build a record from a JSON value, if it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Record::new(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &RawFields {
        &self.fields
    }

    pub fn converted_amount(&self) -> Option<Decimal> {
        self.converted_amount
    }

    /// Return a copy of this record carrying a reference-currency amount
    pub fn with_converted_amount(&self, amount: Decimal) -> Record {
        Record {
            fields: self.fields.clone(),
            converted_amount: Some(amount),
        }
    }
}

impl From<RawFields> for Record {
    fn from(fields: RawFields) -> Self {
        Record::new(fields)
    }
}
