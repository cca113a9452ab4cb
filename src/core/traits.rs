//! Core traits
//!
//! The conversion collaborator sits behind a trait so the report can be built
//! with a rate table, a remote lookup, or nothing at all.

use rust_decimal::Decimal;

/// Converts amounts into the reference currency (rubles)
pub trait CurrencyConverter {
    /// Convert `amount` denominated in `code`
    ///
    /// Returns `None` when no rate is available. Callers fall back to the
    /// original amount and currency; unavailability is never an error.
    fn to_reference(&self, amount: Decimal, code: &str) -> Option<Decimal>;
}
