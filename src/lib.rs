//! Transaction Viewer Library
//! # Overview
//!
//! Turns loosely-typed bank transaction records into a masked, human-readable
//! report: filter by status, currency and keyword, sort by date, convert into
//! rubles, and format each operation.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Record, Status, ViewerError)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Pure record processing:
//!   - [`core::fields`] - Field extraction across key casings and shapes
//!   - [`core::mask`] - Card and account number masking
//!   - [`core::filter`] - Filtering, sorting, search and category counts
//!   - [`core::format`] - Display formatting
//!   - [`core::convert`] - Conversion into the reference currency
//! - [`io`] - JSON/CSV readers, rate files and report output
//! - [`pipeline`] - Stage composition and report building
//!
//! # Failure Model
//!
//! Malformed record data never fails: dates, amounts and holder strings that
//! cannot be interpreted are displayed as they are. Errors are reserved for
//! unreadable input files, bad configuration, and the strict masking
//! utilities [`core::mask_card_number`] and [`core::mask_account_number`].

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{
    count_by_category, filter_by_currency, filter_by_status, format_record, mask_account_number,
    mask_card_number, mask_holder, search_by_description, sort_by_date, CurrencyConverter,
    RateTable,
};
pub use pipeline::{build_report, process_file, Report, ReportOptions};
pub use types::{IdentifierKind, Record, Status, ViewerError};
