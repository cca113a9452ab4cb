//! Exchange rate files
//!
//! A rate file is a JSON object mapping currency codes to ruble rates:
//!
//! ```json
//! {"USD": 92.5, "EUR": 99.1}
//! ```

use crate::core::RateTable;
use crate::io::open_input;
use crate::types::ViewerError;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Load a rate table from a JSON file
///
/// # Errors
///
/// Returns `FileNotFound`/`IoError` when the file cannot be read, `ParseError`
/// for malformed JSON and `InvalidRate` for a non-positive or non-numeric rate.
pub fn read_rate_file(path: &Path) -> Result<RateTable, ViewerError> {
    let mut document = String::new();
    BufReader::new(open_input(path)?).read_to_string(&mut document)?;

    let table = RateTable::from_json_str(&document)?;
    info!(path = %path.display(), "loaded exchange rates");
    Ok(table)
}
