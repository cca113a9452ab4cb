//! I/O module
//!
//! Reads raw transaction records from files and writes finished reports.
//!
//! # Components
//!
//! - `json_reader` - JSON array of transaction objects
//! - `csv_reader` - CSV export with a header row (`;` or `,` delimited)
//! - `rates` - Exchange rate files
//! - `report_writer` - Text and JSON report output
//!
//! Readers are selected at runtime through the [`RecordReader`] trait and the
//! [`create_reader`] factory, either from an explicit [`InputFormat`] or from
//! the file extension.

pub mod csv_reader;
pub mod json_reader;
pub mod rates;
pub mod report_writer;

pub use csv_reader::CsvReader;
pub use json_reader::JsonReader;
pub use rates::read_rate_file;
pub use report_writer::write_report;

use crate::cli::InputFormat;
use crate::types::{Record, ViewerError};
use std::fs::File;
use std::path::Path;

/// Source of raw transaction records
pub trait RecordReader {
    /// Read every record from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or if the
    /// document is structurally invalid. Individual malformed rows are
    /// skipped with a warning instead.
    fn read(&self, path: &Path) -> Result<Vec<Record>, ViewerError>;
}

/// Create the reader for an input format
pub fn create_reader(format: InputFormat) -> Box<dyn RecordReader> {
    match format {
        InputFormat::Json => Box::new(JsonReader),
        InputFormat::Csv => Box::new(CsvReader),
    }
}

/// Pick the input format from the file extension
///
/// # Errors
///
/// Returns `UnsupportedFormat` for anything other than `.json` or `.csv`.
pub fn detect_format(path: &Path) -> Result<InputFormat, ViewerError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(InputFormat::Json),
        Some("csv") => Ok(InputFormat::Csv),
        _ => Err(ViewerError::unsupported_format(&path.display().to_string())),
    }
}

/// Open a file, reporting a missing file as `FileNotFound`
pub(crate) fn open_input(path: &Path) -> Result<File, ViewerError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ViewerError::file_not_found(&path.display().to_string()),
        _ => ViewerError::from(e),
    })
}
