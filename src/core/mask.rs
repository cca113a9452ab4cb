//! Card and account number masking
//!
//! Two separate entry points with different failure behaviour:
//!
//! - [`mask_holder`] is used on the report path. It accepts any holder string
//!   (`"Visa Platinum 1234567890123456"`, `"Счет 12345678901234567890"`, a bare
//!   digit run, or garbage) and never fails. Input it cannot classify is
//!   returned unchanged.
//! - [`mask_card_number`] and [`mask_account_number`] validate their input and
//!   return [`ViewerError::InvalidIdentifierFormat`] when it has the wrong shape.

use crate::types::{IdentifierKind, ViewerError};

const CARD_DIGITS: usize = 16;
const MIN_ACCOUNT_DIGITS: usize = 4;
const ACCOUNT_KEYWORDS: [&str; 3] = ["счет", "счёт", "account"];

fn is_digit_run(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// `XXXX XX** **** XXXX` for a 16-digit run
fn card_mask(digits: &str) -> String {
    format!(
        "{} {}** **** {}",
        &digits[..4],
        &digits[4..6],
        &digits[digits.len() - 4..]
    )
}

/// `**XXXX` for a run of at least four digits
fn account_mask(digits: &str) -> String {
    format!("**{}", &digits[digits.len() - 4..])
}

fn has_account_keyword(label: &str) -> bool {
    let lowered = label.to_lowercase();
    ACCOUNT_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Mask the trailing number of a holder string
///
/// Classification, in priority order:
/// 1. no trailing all-digit token: unchanged
/// 2. label naming an account: `"{label} **{last4}"` (needs 4+ digits)
/// 3. any other label: `"{label} {first4} {next2}** **** {last4}"` (needs 16 digits)
/// 4. no label: 16 digits as a card, 4+ digits as an account
pub fn mask_holder(holder: &str) -> String {
    let trimmed = holder.trim();
    let (label, digits) = match trimmed.rfind(char::is_whitespace) {
        Some(split) => (trimmed[..split].trim_end(), trimmed[split..].trim_start()),
        None => ("", trimmed),
    };
    if !is_digit_run(digits) {
        return holder.to_string();
    }

    let masked = if label.is_empty() {
        match digits.len() {
            CARD_DIGITS => card_mask(digits),
            n if n >= MIN_ACCOUNT_DIGITS => account_mask(digits),
            _ => return holder.to_string(),
        }
    } else if has_account_keyword(label) {
        if digits.len() < MIN_ACCOUNT_DIGITS {
            return holder.to_string();
        }
        account_mask(digits)
    } else {
        if digits.len() != CARD_DIGITS {
            return holder.to_string();
        }
        card_mask(digits)
    };

    if label.is_empty() {
        masked
    } else {
        format!("{} {}", label, masked)
    }
}

/// Mask an optional holder, rendering a missing one as an empty string
pub fn mask_optional_holder(holder: Option<&str>) -> String {
    holder.map(mask_holder).unwrap_or_default()
}

/// Mask a bare card number as `XXXX XX** **** XXXX`
///
/// # Errors
///
/// Returns `InvalidIdentifierFormat` unless the input is exactly 16 ASCII digits.
pub fn mask_card_number(number: &str) -> Result<String, ViewerError> {
    if !is_digit_run(number) || number.len() != CARD_DIGITS {
        return Err(ViewerError::invalid_identifier(IdentifierKind::Card, number));
    }
    Ok(card_mask(number))
}

/// Mask a bare account number as `**XXXX`
///
/// # Errors
///
/// Returns `InvalidIdentifierFormat` unless the input is at least 4 ASCII digits.
pub fn mask_account_number(number: &str) -> Result<String, ViewerError> {
    if !is_digit_run(number) || number.len() < MIN_ACCOUNT_DIGITS {
        return Err(ViewerError::invalid_identifier(
            IdentifierKind::Account,
            number,
        ));
    }
    Ok(account_mask(number))
}
