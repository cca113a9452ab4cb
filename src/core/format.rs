//! Display formatting for a single transaction
//!
//! ```text
//! 26.08.2019 Перевод организации
//! Maestro 1596 83** **** 5199 -> Счет **9589
//! Сумма: 31957.58 руб.
//! ```
//!
//! Formatting is total: missing fields render as empty strings.

use crate::core::fields::{self, format_decimal};
use crate::core::mask::mask_holder;
use crate::types::Record;

/// Currency code shown next to converted amounts
pub const REFERENCE_CURRENCY: &str = "RUB";

/// Render an ISO-like timestamp as `DD.MM.YYYY`, passing anything else through
///
/// The calendar day is the one written in the timestamp, not its UTC day.
pub fn format_date(raw: &str) -> String {
    match fields::parse_local_date(raw) {
        Some(parsed) => parsed.format("%d.%m.%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Masked `from -> to` line, `None` when neither party is present
pub fn format_parties(record: &Record) -> Option<String> {
    let from = fields::from_holder(record).map(|h| mask_holder(&h));
    let to = fields::to_holder(record).map(|h| mask_holder(&h));

    match (from, to) {
        (Some(from), Some(to)) => Some(format!("{} -> {}", from, to)),
        (Some(single), None) | (None, Some(single)) => Some(single),
        (None, None) => None,
    }
}

/// Displayed amount and currency, preferring a converted reference amount
pub fn amount_parts(record: &Record) -> (String, String) {
    match record.converted_amount() {
        Some(converted) => (format_decimal(converted), REFERENCE_CURRENCY.to_string()),
        None => {
            let info = fields::extract_amount(record);
            (info.amount.to_string(), info.currency_display().to_string())
        }
    }
}

/// `"{amount} {currency}"`
pub fn format_amount(record: &Record) -> String {
    let (amount, currency) = amount_parts(record);
    format!("{} {}", amount, currency).trim_end().to_string()
}

/// Render a record as a two- or three-line block
pub fn format_record(record: &Record) -> String {
    let header = format!(
        "{} {}",
        format_date(&fields::date(record)),
        fields::description(record)
    );

    let mut lines = vec![header.trim().to_string()];
    if let Some(parties) = format_parties(record) {
        lines.push(parties);
    }
    lines.push(format!("Сумма: {}", format_amount(record)));

    lines.join("\n")
}
