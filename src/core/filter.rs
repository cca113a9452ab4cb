//! Filtering, sorting, search and category statistics
//!
//! Every function takes a slice and returns a new `Vec`; input records are
//! never modified. Relative order is preserved wherever records are kept.

use crate::core::fields::{self, CURRENCY};
use crate::types::{Record, Status};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Keep records whose status equals `status`, ignoring case
///
/// A status outside the EXECUTED/CANCELED/PENDING vocabulary matches nothing.
pub fn filter_by_status(records: &[Record], status: &str) -> Vec<Record> {
    let Ok(wanted) = status.parse::<Status>() else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| fields::status(record).eq_ignore_ascii_case(wanted.as_str()))
        .cloned()
        .collect()
}

/// Keep records whose currency code equals `code`, ignoring case
///
/// A ruble target also accepts records whose flat `currency` field holds a
/// localized spelling such as "руб" or "рубль".
pub fn filter_by_currency(records: &[Record], code: &str) -> Vec<Record> {
    let wanted = code.trim().to_lowercase();
    let ruble_target = fields::is_ruble(&wanted);

    records
        .iter()
        .filter(|record| {
            let info = fields::extract_amount(record);
            if info.code.to_lowercase() == wanted {
                return true;
            }
            ruble_target
                && matches!(
                    CURRENCY.resolve(record.fields()),
                    Some(Value::String(raw)) if fields::is_ruble(raw)
                )
        })
        .cloned()
        .collect()
}

fn date_key(record: &Record) -> Option<NaiveDateTime> {
    fields::parse_date(&fields::date(record))
}

/// Stable sort by date
///
/// Records without a parseable date compare as the earliest possible value,
/// so they lead an ascending sort and trail a descending one.
pub fn sort_by_date(records: &[Record], descending: bool) -> Vec<Record> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &Record)> =
        records.iter().map(|r| (date_key(r), r)).collect();

    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }

    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Keep records whose description contains `term`, ignoring case
///
/// An empty term matches nothing.
pub fn search_by_description(records: &[Record], term: &str) -> Vec<Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| fields::description(record).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Count records per category by case-insensitive description match
///
/// A record counts toward every category it mentions. Categories without a
/// match are reported with a zero count. No records means an empty result.
pub fn count_by_category<I, S>(records: &[Record], categories: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = BTreeMap::new();
    if records.is_empty() {
        return counts;
    }

    let descriptions: Vec<String> = records
        .iter()
        .map(|record| fields::description(record).to_lowercase())
        .collect();

    for category in categories {
        let category = category.as_ref();
        let needle = category.to_lowercase();
        let count = descriptions
            .iter()
            .filter(|description| description.contains(&needle))
            .count();
        counts.insert(category.to_string(), count);
    }

    counts
}

/// Distinct first words of the descriptions, used as default categories
pub fn extract_categories(records: &[Record]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|record| {
            fields::description(record)
                .split_whitespace()
                .next()
                .map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records
            .iter()
            .map(|r| r.fields()["id"].as_i64().unwrap())
            .collect()
    }

    #[fixture]
    fn operations() -> Vec<Record> {
        vec![
            record(json!({
                "id": 1, "date": "2023-01-01", "description": "Перевод организации",
                "status": "EXECUTED", "amount": "1000", "currency": "RUB"
            })),
            record(json!({
                "id": 2, "date": "2023-01-02", "description": "Открытие вклада",
                "status": "EXECUTED", "amount": "500", "currency": "USD"
            })),
            record(json!({
                "id": 3, "date": "2023-01-03", "description": "Перевод с карты на карту",
                "status": "CANCELED", "amount": "200", "currency": "RUB"
            })),
            record(json!({
                "id": 4, "date": "2023-01-04", "description": "Оплата услуг",
                "status": "PENDING", "amount": "1500", "currency": "EUR"
            })),
        ]
    }

    #[test]
    fn test_filter_by_status_ignores_case() {
        let input = vec![
            record(json!({"id": 1, "status": "executed"})),
            record(json!({"id": 2, "status": "CANCELED"})),
        ];

        let result = filter_by_status(&input, "EXECUTED");
        assert_eq!(result, vec![input[0].clone()]);
    }

    #[rstest]
    #[case::executed("EXECUTED", vec![1, 2])]
    #[case::lowercase_target("canceled", vec![3])]
    #[case::pending("Pending", vec![4])]
    #[case::unknown("REFUNDED", vec![])]
    fn test_filter_by_status(
        operations: Vec<Record>,
        #[case] status: &str,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ids(&filter_by_status(&operations, status)), expected);
    }

    #[test]
    fn test_filter_by_status_reads_state_key_variants() {
        let input = vec![
            record(json!({"id": 1, "State": "EXECUTED"})),
            record(json!({"id": 2, "STATE": "executed"})),
            record(json!({"id": 3, "state": "CANCELED"})),
            record(json!({"id": 4})),
        ];

        assert_eq!(ids(&filter_by_status(&input, "EXECUTED")), vec![1, 2]);
    }

    #[test]
    fn test_filter_by_status_empty_input() {
        assert!(filter_by_status(&[], "EXECUTED").is_empty());
    }

    #[rstest]
    #[case::usd("USD", vec![2])]
    #[case::lowercase("rub", vec![1, 3])]
    #[case::missing("GBP", vec![])]
    fn test_filter_by_currency(
        operations: Vec<Record>,
        #[case] code: &str,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ids(&filter_by_currency(&operations, code)), expected);
    }

    #[test]
    fn test_filter_by_currency_nested_code() {
        let input = vec![
            record(json!({"id": 1, "operationAmount": {"amount": "1", "currency": {"code": "USD", "name": "USD"}}})),
            record(json!({"id": 2, "operationAmount": {"amount": "2", "currency": {"code": "RUB", "name": "руб."}}})),
        ];

        assert_eq!(ids(&filter_by_currency(&input, "usd")), vec![1]);
        assert_eq!(ids(&filter_by_currency(&input, "RUB")), vec![2]);
    }

    #[test]
    fn test_ruble_filter_accepts_localized_flat_currency() {
        let input = vec![
            record(json!({"id": 1, "currency": "руб"})),
            record(json!({"id": 2, "currency": "Рубль"})),
            record(json!({"id": 3, "currency": "RUB"})),
            record(json!({"id": 4, "currency": "USD"})),
            record(json!({"id": 5, "operationAmount": {"currency": {"code": "руб"}}})),
        ];

        assert_eq!(ids(&filter_by_currency(&input, "RUB")), vec![1, 2, 3]);
        assert_eq!(ids(&filter_by_currency(&input, "USD")), vec![4]);
    }

    #[rstest]
    fn test_filter_does_not_modify_input(operations: Vec<Record>) {
        let before = operations.clone();

        let _ = filter_by_status(&operations, "EXECUTED");
        let _ = filter_by_currency(&operations, "RUB");
        let _ = sort_by_date(&operations, true);

        assert_eq!(operations, before);
    }

    #[rstest]
    #[case::descending(true, vec![4, 3, 2, 1])]
    #[case::ascending(false, vec![1, 2, 3, 4])]
    fn test_sort_by_date(
        operations: Vec<Record>,
        #[case] descending: bool,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ids(&sort_by_date(&operations, descending)), expected);
    }

    #[test]
    fn test_sort_by_date_mixed_formats() {
        let input = vec![
            record(json!({"id": 1, "date": "2019-07-03T18:35:29.512364"})),
            record(json!({"id": 2, "date": "2018-06-30T02:08:58.425572Z"})),
            record(json!({"id": 3, "date": "2019-07-03 18:35:30"})),
        ];

        assert_eq!(ids(&sort_by_date(&input, false)), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_date_unparseable_dates_are_earliest() {
        let input = vec![
            record(json!({"id": 1, "date": "2020-01-01T00:00:00"})),
            record(json!({"id": 2, "date": "not a date"})),
            record(json!({"id": 3})),
            record(json!({"id": 4, "date": "2021-01-01T00:00:00"})),
        ];

        assert_eq!(ids(&sort_by_date(&input, false)), vec![2, 3, 1, 4]);
        assert_eq!(ids(&sort_by_date(&input, true)), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_descending_then_ascending_matches_ascending() {
        let input = vec![
            record(json!({"id": 1, "date": "2020-05-01T00:00:00"})),
            record(json!({"id": 2, "date": "2020-01-01T00:00:00"})),
            record(json!({"id": 3, "date": "2020-05-01T00:00:00"})),
            record(json!({"id": 4, "date": "2019-12-31T23:59:59"})),
        ];

        let round_trip = sort_by_date(&sort_by_date(&input, true), false);
        let direct = sort_by_date(&input, false);
        assert_eq!(ids(&round_trip), ids(&direct));
        assert_eq!(ids(&direct), vec![4, 2, 1, 3]);
    }

    #[rstest]
    #[case::found("перевод", vec![1, 3])]
    #[case::uppercase("ПЕРЕВОД", vec![1, 3])]
    #[case::not_found("несуществующееслово", vec![])]
    #[case::empty_term("", vec![])]
    fn test_search_by_description(
        operations: Vec<Record>,
        #[case] term: &str,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ids(&search_by_description(&operations, term)), expected);
    }

    #[test]
    fn test_search_by_description_empty_records() {
        assert!(search_by_description(&[], "перевод").is_empty());
    }

    #[rstest]
    fn test_count_by_category(operations: Vec<Record>) {
        let result = count_by_category(&operations, ["перевод", "вклад"]);

        let expected: BTreeMap<String, usize> =
            [("перевод".to_string(), 2), ("вклад".to_string(), 1)].into();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_count_by_category_keeps_given_case(operations: Vec<Record>) {
        let result = count_by_category(&operations, ["ПЕРЕВОД", "ВКЛАД"]);
        assert_eq!(result["ПЕРЕВОД"], 2);
        assert_eq!(result["ВКЛАД"], 1);
    }

    #[rstest]
    fn test_count_by_category_record_counts_for_several(operations: Vec<Record>) {
        let result = count_by_category(&operations, ["карт", "перевод"]);
        assert_eq!(result["карт"], 1);
        assert_eq!(result["перевод"], 2);
    }

    #[rstest]
    fn test_count_by_category_zero_matches(operations: Vec<Record>) {
        let result = count_by_category(&operations, ["несуществующаякатегория"]);
        assert_eq!(result["несуществующаякатегория"], 0);
    }

    #[rstest]
    fn test_count_by_category_empty_inputs(operations: Vec<Record>) {
        assert!(count_by_category(&operations, Vec::<String>::new()).is_empty());
        assert!(count_by_category(&[], ["перевод"]).is_empty());
    }

    #[rstest]
    fn test_extract_categories(operations: Vec<Record>) {
        let categories: Vec<String> = extract_categories(&operations).into_iter().collect();
        assert_eq!(categories, vec!["Оплата", "Открытие", "Перевод"]);
    }
}
