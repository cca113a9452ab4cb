//! Lazy helpers over card numbers and record descriptions

use crate::core::fields;
use crate::types::{Record, ViewerError};

/// Largest number representable as a 16-digit card number
pub const MAX_CARD_NUMBER: u64 = 9_999_999_999_999_999;

/// Card numbers `start..=end` as zero-padded `XXXX XXXX XXXX XXXX` strings
///
/// # Errors
///
/// Returns `InvalidRange` when `start` is below 1, `start` exceeds `end`, or
/// `end` does not fit in 16 digits.
pub fn card_number_generator(
    start: u64,
    end: u64,
) -> Result<impl Iterator<Item = String>, ViewerError> {
    if start < 1 {
        return Err(ViewerError::invalid_range("start must be at least 1"));
    }
    if start > end {
        return Err(ViewerError::invalid_range("start cannot be greater than end"));
    }
    if end > MAX_CARD_NUMBER {
        return Err(ViewerError::invalid_range(
            "end exceeds the largest 16-digit card number",
        ));
    }

    Ok((start..=end).map(|number| {
        let digits = format!("{:016}", number);
        format!(
            "{} {} {} {}",
            &digits[..4],
            &digits[4..8],
            &digits[8..12],
            &digits[12..]
        )
    }))
}

/// Descriptions of the records in order, empty for records without one
pub fn transaction_descriptions(records: &[Record]) -> impl Iterator<Item = String> + '_ {
    records.iter().map(fields::description)
}
