//! Report output
//!
//! Text output:
//!
//! ```text
//! Статистика операций по категориям:
//!   Перевод: 2 операций
//!
//! Всего банковских операций в выборке: 2
//!
//! 26.08.2019 Перевод организации
//! Maestro 1596 83** **** 5199 -> Счет **9589
//! Сумма: 31957.58 руб.
//!
//! 03.07.2019 Перевод организации
//! MasterCard 7158 30** **** 6758 -> Счет **5560
//! Сумма: 8221.37 USD
//! ```
//!
//! When categories were requested but none could be counted, the statistics
//! block is replaced by [`NO_CATEGORIES_MESSAGE`].
//!
//! JSON output is the serialized [`Report`].

use crate::cli::OutputFormat;
use crate::pipeline::Report;
use crate::types::ViewerError;
use std::io::Write;

pub const EMPTY_REPORT_MESSAGE: &str =
    "Не найдено ни одной транзакции, подходящей под ваши условия фильтрации";

/// Printed instead of the statistics block when no category could be counted
pub const NO_CATEGORIES_MESSAGE: &str = "Не удалось определить категории операций.";

/// Write a report in the requested format
///
/// # Errors
///
/// Returns `IoError` if writing fails.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), ViewerError> {
    match format {
        OutputFormat::Text => write_text(report, output),
        OutputFormat::Json => write_json(report, output),
    }
}

fn write_text(report: &Report, output: &mut dyn Write) -> Result<(), ViewerError> {
    match &report.categories {
        Some(categories) if categories.is_empty() => {
            writeln!(output, "{}", NO_CATEGORIES_MESSAGE)?;
            writeln!(output)?;
        }
        Some(categories) => {
            writeln!(output, "Статистика операций по категориям:")?;
            for (category, count) in categories {
                writeln!(output, "  {}: {} операций", category, count)?;
            }
            writeln!(output)?;
        }
        None => {}
    }

    if report.is_empty() {
        writeln!(output, "{}", EMPTY_REPORT_MESSAGE)?;
        return Ok(output.flush()?);
    }

    writeln!(output, "Всего банковских операций в выборке: {}", report.total)?;
    for entry in &report.transactions {
        writeln!(output)?;
        writeln!(output, "{}", entry.block)?;
    }

    Ok(output.flush()?)
}

fn write_json(report: &Report, output: &mut dyn Write) -> Result<(), ViewerError> {
    serde_json::to_writer_pretty(&mut *output, report)?;
    writeln!(output)?;
    Ok(output.flush()?)
}
