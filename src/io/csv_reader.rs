//! CSV transaction reader
//!
//! Bank exports come either `;`- or `,`-delimited; the delimiter is sniffed
//! from the header line. Each row becomes a record keyed by the header
//! names with every cell kept as a string. Empty cells are left out so
//! that field extraction falls back to other keys or defaults.

use crate::io::{open_input, RecordReader};
use crate::types::{RawFields, Record, ViewerError};
use csv::{ReaderBuilder, Trim};
use serde_json::Value;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct CsvReader;

/// `;` when the header has more semicolons than commas, `,` otherwise
fn sniff_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or_default();
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

impl CsvReader {
    /// Parse records from in-memory CSV content
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the header row cannot be read. Rows that fail
    /// to parse are skipped with a warning.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Record>, ViewerError> {
        let content = content.trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .delimiter(sniff_delimiter(content))
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for (row, result) in reader.records().enumerate() {
            match result {
                Ok(row_values) => {
                    let fields: RawFields = headers
                        .iter()
                        .zip(row_values.iter())
                        .filter(|(_, cell)| !cell.is_empty())
                        .map(|(name, cell)| (name.to_string(), Value::String(cell.to_string())))
                        .collect();
                    records.push(Record::new(fields));
                }
                Err(e) => {
                    // Row numbers are 1-based after the header
                    warn!(row = row + 1, error = %e, "skipping malformed CSV row");
                }
            }
        }

        Ok(records)
    }
}

impl RecordReader for CsvReader {
    fn read(&self, path: &Path) -> Result<Vec<Record>, ViewerError> {
        debug!(path = %path.display(), "reading CSV transactions");

        let mut content = String::new();
        BufReader::new(open_input(path)?).read_to_string(&mut content)?;

        let records = self.parse_str(&content)?;
        info!(path = %path.display(), count = records.len(), "read CSV transactions");
        Ok(records)
    }
}
