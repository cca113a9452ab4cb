//! Benchmark suite for the report pipeline
//!
//! Measures masking, sorting and the full report build over synthetic
//! operations using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Records are generated in memory with a mix of card and account holders,
//! three statuses, ruble and dollar amounts, and shuffled dates.

use rust_decimal::Decimal;
use serde_json::json;
use txn_viewer::pipeline::{build_report, CategorySelection, ReportOptions, SortOrder};
use txn_viewer::{mask_holder, sort_by_date, RateTable, Record, Status};

fn main() {
    divan::main();
}

fn operations(count: usize) -> Vec<Record> {
    let statuses = ["EXECUTED", "CANCELED", "PENDING"];
    let descriptions = [
        "Перевод организации",
        "Перевод с карты на карту",
        "Открытие вклада",
    ];

    (0..count)
        .filter_map(|i| {
            let (code, name) = if i % 2 == 0 {
                ("RUB", "руб.")
            } else {
                ("USD", "USD")
            };
            Record::from_value(json!({
                "id": i,
                "state": statuses[i % statuses.len()],
                "date": format!("20{:02}-{:02}-{:02}T10:50:58.294041", 10 + i * 7 % 14, 1 + i % 12, 1 + i * 13 % 28),
                "operationAmount": {
                    "amount": Decimal::new((i as i64 * 7919) % 100_000, 2).to_string(),
                    "currency": {"name": name, "code": code}
                },
                "description": descriptions[i % descriptions.len()],
                "from": format!("Maestro {:016}", 1_596_837_868_705_199u64 + i as u64),
                "to": format!("Счет {:020}", 64_686_473_678_894_779_589u128 + i as u128),
            }))
        })
        .collect()
}

#[divan::bench(args = ["Maestro 1596837868705199", "Счет 64686473678894779589", "1596837868705199", "not a number"])]
fn mask_single_holder(holder: &str) -> String {
    mask_holder(divan::black_box(holder))
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn sort_operations(bencher: divan::Bencher, count: usize) {
    let records = operations(count);
    bencher.bench(|| sort_by_date(divan::black_box(&records), true));
}

/// Status filter and formatting only
#[divan::bench(args = [100, 1_000, 10_000])]
fn default_report(bencher: divan::Bencher, count: usize) {
    let records = operations(count);
    let options = ReportOptions {
        status: Some(Status::Executed),
        ..Default::default()
    };
    bencher.bench(|| build_report(divan::black_box(&records), &options, None));
}

/// Every stage enabled, including conversion
#[divan::bench(args = [100, 1_000, 10_000])]
fn full_report(bencher: divan::Bencher, count: usize) {
    let records = operations(count);
    let rates = RateTable::from_specs(["USD=92.5"]).expect("valid rate");
    let options = ReportOptions {
        status: Some(Status::Executed),
        sort: Some(SortOrder::Descending),
        currency: None,
        search: Some("перевод".to_string()),
        categories: Some(CategorySelection::FromDescriptions),
    };
    bencher.bench(|| build_report(divan::black_box(&records), &options, Some(&rates)));
}
