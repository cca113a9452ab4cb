//! Report produced by the pipeline
//!
//! A [`Report`] is the ordered list of formatted transactions plus optional
//! category statistics. It carries both the rendered text block of each
//! transaction and its individual display fields for JSON output.

use crate::core::fields::{self, ID};
use crate::core::format::{amount_parts, format_date, format_record};
use crate::core::mask::mask_holder;
use crate::types::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// One transaction as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub amount: String,
    pub currency: String,

    /// Multi-line text block for the plain report
    #[serde(skip)]
    pub block: String,
}

impl ReportEntry {
    pub fn from_record(record: &Record) -> Self {
        let (amount, currency) = amount_parts(record);
        ReportEntry {
            id: ID.text(record.fields()),
            date: format_date(&fields::date(record)),
            description: fields::description(record),
            from: fields::from_holder(record).map(|h| mask_holder(&h)),
            to: fields::to_holder(record).map(|h| mask_holder(&h)),
            amount,
            currency,
            block: format_record(record),
        }
    }
}

/// Finished report
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Report {
    pub total: usize,
    pub transactions: Vec<ReportEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, usize>>,
}

impl Report {
    pub fn new(records: &[Record], categories: Option<BTreeMap<String, usize>>) -> Self {
        let transactions: Vec<ReportEntry> = records.iter().map(ReportEntry::from_record).collect();
        Report {
            total: transactions.len(),
            transactions,
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_from_record() {
        let record = Record::from_value(json!({
            "id": 939719570,
            "state": "EXECUTED",
            "date": "2018-06-30T02:08:58.425572",
            "operationAmount": {"amount": "9824.07", "currency": {"name": "USD", "code": "USD"}},
            "description": "Перевод организации",
            "from": "Счет 75106830613657916952",
            "to": "Счет 11776614605963066702"
        }))
        .unwrap();

        let entry = ReportEntry::from_record(&record);
        assert_eq!(entry.id, "939719570");
        assert_eq!(entry.date, "30.06.2018");
        assert_eq!(entry.from.as_deref(), Some("Счет **6952"));
        assert_eq!(entry.to.as_deref(), Some("Счет **6702"));
        assert_eq!(entry.amount, "9824.07");
        assert_eq!(entry.currency, "USD");
        assert!(entry.block.ends_with("Сумма: 9824.07 USD"));
    }

    #[test]
    fn test_report_serializes_without_blocks() {
        let record = Record::from_value(json!({"id": 1, "amount": 5, "currency": "RUB"})).unwrap();
        let report = Report::new(&[record], None);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["transactions"][0]["amount"], "5.00");
        assert!(value["transactions"][0].get("block").is_none());
        assert!(value["transactions"][0].get("from").is_none());
        assert!(value.get("categories").is_none());
    }
}
