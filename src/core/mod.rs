//! Core record processing
//!
//! Pure functions only: nothing in this module performs I/O or logs.
//! - `fields` - Field extraction over loosely-typed records
//! - `mask` - Card and account number masking
//! - `filter` - Filtering, sorting, search and category statistics
//! - `format` - Display formatting of a single record
//! - `convert` - Conversion into the reference currency
//! - `traits` - Collaborator interfaces
//! - `generators` - Card number ranges and description iteration

pub mod convert;
pub mod fields;
pub mod filter;
pub mod format;
pub mod generators;
pub mod mask;
pub mod traits;

pub use convert::{convert_records, RateTable};
pub use fields::{extract_amount, Amount, AmountInfo, FieldResolver};
pub use filter::{
    count_by_category, extract_categories, filter_by_currency, filter_by_status,
    search_by_description, sort_by_date,
};
pub use format::{format_date, format_record};
pub use generators::{card_number_generator, transaction_descriptions};
pub use mask::{mask_account_number, mask_card_number, mask_holder};
pub use traits::CurrencyConverter;
