//! Field extraction over loosely-typed records
//!
//! Ingested records disagree on key casing (`state`/`State`/`STATE`), on
//! shape (nested `operationAmount` vs flat `amount`/`currency`) and on value
//! types (amounts as strings or numbers). Every accessor here is total: a
//! missing or malformed field degrades to an empty or default value.
//!
//! Lookups go through a [`FieldResolver`], an ordered list of candidate key
//! names. For each candidate an exact-case key is tried first, then any key
//! equal to it ignoring ASCII case. The first non-empty value wins.

use crate::types::{RawFields, Record};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Priority-ordered key lookup
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver {
    candidates: &'static [&'static str],
}

impl FieldResolver {
    pub const fn new(candidates: &'static [&'static str]) -> Self {
        FieldResolver { candidates }
    }

    /// Find the first non-empty value among the candidate keys
    pub fn resolve<'a>(&self, fields: &'a RawFields) -> Option<&'a Value> {
        self.candidates.iter().find_map(|name| {
            if let Some(value) = fields.get(*name).filter(|v| !is_blank(v)) {
                return Some(value);
            }
            fields
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
                .find(|value| !is_blank(value))
        })
    }

    /// Resolve a value and render it as text, empty when absent
    pub fn text(&self, fields: &RawFields) -> String {
        self.resolve(fields).map(value_text).unwrap_or_default()
    }
}

pub const ID: FieldResolver = FieldResolver::new(&["id"]);
pub const STATUS: FieldResolver = FieldResolver::new(&["state", "status"]);
pub const DATE: FieldResolver = FieldResolver::new(&["date"]);
pub const DESCRIPTION: FieldResolver = FieldResolver::new(&["description"]);
pub const FROM: FieldResolver = FieldResolver::new(&["from"]);
pub const TO: FieldResolver = FieldResolver::new(&["to"]);
pub const OPERATION_AMOUNT: FieldResolver =
    FieldResolver::new(&["operationAmount", "operation_amount"]);
pub const AMOUNT: FieldResolver = FieldResolver::new(&["amount"]);
pub const CURRENCY: FieldResolver = FieldResolver::new(&["currency"]);
pub const CURRENCY_CODE: FieldResolver = FieldResolver::new(&["currency_code"]);
pub const CURRENCY_NAME: FieldResolver = FieldResolver::new(&["currency_name"]);
const CODE: FieldResolver = FieldResolver::new(&["code"]);
const NAME: FieldResolver = FieldResolver::new(&["name"]);

const RUBLE_SPELLINGS: [&str; 5] = ["rub", "rur", "руб", "руб.", "рубль"];

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Render a scalar value as text; containers render as empty
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

pub fn status(record: &Record) -> String {
    STATUS.text(record.fields())
}

pub fn date(record: &Record) -> String {
    DATE.text(record.fields())
}

pub fn description(record: &Record) -> String {
    DESCRIPTION.text(record.fields())
}

pub fn from_holder(record: &Record) -> Option<String> {
    Some(FROM.text(record.fields())).filter(|s| !s.is_empty())
}

pub fn to_holder(record: &Record) -> Option<String> {
    Some(TO.text(record.fields())).filter(|s| !s.is_empty())
}

fn parse_timestamp(
    raw: &str,
    offset_aware: fn(DateTime<FixedOffset>) -> NaiveDateTime,
) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(offset_aware(parsed));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse an ISO-8601-like timestamp as an instant for ordering
///
/// Accepts RFC 3339 (`Z` or offset), naive timestamps with `T` or a space
/// separator and optional fractional seconds, and bare dates. Offset
/// timestamps are normalised to UTC; naive ones are taken as they are.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(raw, |parsed| parsed.naive_utc())
}

/// Parse a timestamp as written, keeping the wall-clock time of its offset
///
/// Used for display, where `2023-09-05T01:30:32+03:00` is still the 5th.
pub fn parse_local_date(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(raw, |parsed| parsed.naive_local())
}

/// A transaction amount as it will be displayed
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Parsed(Decimal),
    /// Input that did not parse as a number, shown verbatim
    Raw(String),
}

impl Amount {
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Parsed(value) => Some(*value),
            Amount::Raw(_) => None,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Parsed(Decimal::ZERO)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Parsed(value) => write!(f, "{}", format_decimal(*value)),
            Amount::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Two fractional digits, dot separator
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Parse an amount, normalising a comma decimal separator
pub fn parse_amount(value: &Value) -> Amount {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Amount::Raw(value_text(other)),
    };
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map(Amount::Parsed)
        .unwrap_or(Amount::Raw(raw))
}

/// Amount and currency of a record, whatever shape it arrived in
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AmountInfo {
    pub amount: Amount,
    pub code: String,
    pub name: String,
}

impl AmountInfo {
    /// Display name of the currency, falling back to its code
    pub fn currency_display(&self) -> &str {
        if self.name.is_empty() {
            &self.code
        } else {
            &self.name
        }
    }
}

/// Split a currency value into `(code, name)`
fn currency_parts(value: Option<&Value>) -> (String, String) {
    match value {
        Some(Value::String(code)) => (code.trim().to_string(), String::new()),
        Some(Value::Object(currency)) => (CODE.text(currency), NAME.text(currency)),
        _ => (String::new(), String::new()),
    }
}

/// Extract amount and currency
///
/// Rules, first match wins:
/// 1. a nested `operationAmount` object with `amount` and `currency`
/// 2. flat `amount` / `currency` (or `currency_code` / `currency_name`) fields
/// 3. amount `0.00` with an empty currency
pub fn extract_amount(record: &Record) -> AmountInfo {
    let fields = record.fields();

    if let Some(Value::Object(operation)) = OPERATION_AMOUNT.resolve(fields) {
        let (code, name) = currency_parts(CURRENCY.resolve(operation));
        return AmountInfo {
            amount: AMOUNT.resolve(operation).map(parse_amount).unwrap_or_default(),
            code,
            name,
        };
    }

    let amount = AMOUNT.resolve(fields);
    let currency = CURRENCY.resolve(fields);
    let code_column = CURRENCY_CODE.resolve(fields);
    if amount.is_none() && currency.is_none() && code_column.is_none() {
        return AmountInfo::default();
    }

    let (mut code, mut name) = currency_parts(currency);
    if code.is_empty() {
        code = code_column.map(value_text).unwrap_or_default();
    }
    if name.is_empty() {
        name = CURRENCY_NAME.text(fields);
    }
    AmountInfo {
        amount: amount.map(parse_amount).unwrap_or_default(),
        code,
        name,
    }
}

/// Whether a currency code denotes rubles, including localized spellings
pub fn is_ruble(code: &str) -> bool {
    let lowered = code.trim().to_lowercase();
    RUBLE_SPELLINGS.contains(&lowered.as_str())
}
