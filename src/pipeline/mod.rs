//! Report pipeline
//!
//! Composes the core stages in a fixed order:
//!
//! 1. filter by status
//! 2. sort by date (optional)
//! 3. filter by currency (optional)
//! 4. search descriptions (optional)
//! 5. count categories (optional)
//! 6. convert into the reference currency (optional)
//! 7. format
//!
//! Each stage receives the previous stage's output and returns a new list, so
//! the input records are never touched. [`process_file`] wraps the pipeline
//! with reading the input file and writing the report.

pub mod report;

pub use report::{Report, ReportEntry};

use crate::cli::{InputFormat, OutputFormat};
use crate::core::{
    convert_records, count_by_category, extract_categories, filter_by_currency, filter_by_status,
    search_by_description, sort_by_date, CurrencyConverter,
};
use crate::io::{create_reader, detect_format, write_report};
use crate::types::{Record, Status, ViewerError};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Direction of the date sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Which categories to count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// First word of every remaining description
    FromDescriptions,
    /// Explicitly named categories
    Named(Vec<String>),
}

/// Stage configuration for [`build_report`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    /// Status to keep; `None` keeps every record
    pub status: Option<Status>,
    pub sort: Option<SortOrder>,
    pub currency: Option<String>,
    pub search: Option<String>,
    pub categories: Option<CategorySelection>,
}

/// Run the stages over `records` and build the report
///
/// `converter` is optional; records it cannot convert keep their original
/// amount and currency.
pub fn build_report(
    records: &[Record],
    options: &ReportOptions,
    converter: Option<&dyn CurrencyConverter>,
) -> Report {
    let mut current = records.to_vec();
    debug!(count = current.len(), "starting report pipeline");

    if let Some(status) = options.status {
        current = filter_by_status(&current, status.as_str());
        info!(%status, count = current.len(), "filtered by status");
    }

    if let Some(order) = options.sort {
        current = sort_by_date(&current, order == SortOrder::Descending);
        debug!(?order, "sorted by date");
    }

    if let Some(code) = options.currency.as_deref() {
        current = filter_by_currency(&current, code);
        info!(currency = code, count = current.len(), "filtered by currency");
    }

    if let Some(term) = options.search.as_deref() {
        current = search_by_description(&current, term);
        info!(term, count = current.len(), "searched descriptions");
    }

    let categories = options.categories.as_ref().map(|selection| match selection {
        CategorySelection::FromDescriptions => {
            count_by_category(&current, extract_categories(&current))
        }
        CategorySelection::Named(names) => count_by_category(&current, names),
    });

    if let Some(converter) = converter {
        current = convert_records(&current, converter);
        let converted = current
            .iter()
            .filter(|r| r.converted_amount().is_some())
            .count();
        debug!(converted, total = current.len(), "converted amounts");
    }

    Report::new(&current, categories)
}

/// Read `input_path`, build the report, and write it to `output`
///
/// The input format is taken from `format` or, when `None`, from the file
/// extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the report
/// cannot be written. Malformed individual records never cause an error.
pub fn process_file(
    input_path: &Path,
    format: Option<InputFormat>,
    options: &ReportOptions,
    converter: Option<&dyn CurrencyConverter>,
    output_format: OutputFormat,
    output: &mut dyn Write,
) -> Result<Report, ViewerError> {
    let format = match format {
        Some(format) => format,
        None => detect_format(input_path)?,
    };

    let reader = create_reader(format);
    let records = reader.read(input_path)?;

    let report = build_report(&records, options, converter);
    write_report(&report, output_format, output)?;

    Ok(report)
}
