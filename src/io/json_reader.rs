//! JSON transaction reader
//!
//! Expects a top-level array of objects. A document that is valid JSON but
//! not an array yields no records; elements that are not objects are skipped.

use crate::io::{open_input, RecordReader};
use crate::types::{Record, ViewerError};
use serde_json::Value;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct JsonReader;

impl JsonReader {
    /// Parse records from an in-memory JSON document
    pub fn parse_str(&self, document: &str) -> Result<Vec<Record>, ViewerError> {
        let document = document.trim_start_matches('\u{feff}');
        let value: Value = serde_json::from_str(document)?;

        let Value::Array(items) = value else {
            warn!("JSON document is not an array of transactions, nothing to read");
            return Ok(Vec::new());
        };

        let total = items.len();
        let records: Vec<Record> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let record = Record::from_value(item);
                if record.is_none() {
                    debug!(index, "skipping non-object element");
                }
                record
            })
            .collect();

        if records.len() < total {
            warn!(
                skipped = total - records.len(),
                "some JSON elements were not transaction objects"
            );
        }
        Ok(records)
    }
}

impl RecordReader for JsonReader {
    fn read(&self, path: &Path) -> Result<Vec<Record>, ViewerError> {
        debug!(path = %path.display(), "reading JSON transactions");

        let mut document = String::new();
        BufReader::new(open_input(path)?).read_to_string(&mut document)?;

        let records = self.parse_str(&document)?;
        info!(path = %path.display(), count = records.len(), "read JSON transactions");
        Ok(records)
    }
}
