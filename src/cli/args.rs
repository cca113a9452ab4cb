use crate::core::RateTable;
use crate::io::read_rate_file;
use crate::pipeline::{CategorySelection, ReportOptions, SortOrder};
use crate::types::{Status, ViewerError};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Filter, mask and print bank transactions
#[derive(Parser, Debug)]
#[command(name = "txn-viewer")]
#[command(about = "Filter, mask and print bank transactions from JSON or CSV files", long_about = None)]
pub struct CliArgs {
    /// Input file containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the JSON or CSV file with transactions")]
    pub input_file: PathBuf,

    /// Input format; detected from the file extension when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Status to keep
    #[arg(
        long = "status",
        value_name = "STATUS",
        default_value = "EXECUTED",
        help = "Keep operations with this status: EXECUTED, CANCELED or PENDING"
    )]
    pub status: Status,

    /// Date sort direction
    #[arg(long = "sort", value_name = "ORDER")]
    pub sort: Option<SortArg>,

    /// Currency code to keep
    #[arg(long = "currency", value_name = "CODE", conflicts_with = "rub_only")]
    pub currency: Option<String>,

    /// Keep ruble operations only
    #[arg(long = "rub-only")]
    pub rub_only: bool,

    /// Word to look for in descriptions
    #[arg(long = "search", value_name = "WORD")]
    pub search: Option<String>,

    /// Print per-category statistics using the first word of each description
    #[arg(long = "categories")]
    pub categories: bool,

    /// Count this category (repeatable); implies --categories
    #[arg(long = "category", value_name = "NAME")]
    pub category: Vec<String>,

    /// Ruble exchange rate (repeatable)
    #[arg(long = "rate", value_name = "CODE=RATE")]
    pub rates: Vec<String>,

    /// JSON file with ruble exchange rates
    #[arg(long = "rates-file", value_name = "FILE")]
    pub rates_file: Option<PathBuf>,

    /// Output format
    #[arg(long = "output", value_name = "MODE", default_value = "text")]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Supported input formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

/// Supported report formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Date sort direction on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl CliArgs {
    /// Translate flags into pipeline options
    pub fn to_report_options(&self) -> ReportOptions {
        let currency = if self.rub_only {
            Some("RUB".to_string())
        } else {
            self.currency.clone()
        };

        let categories = if !self.category.is_empty() {
            Some(CategorySelection::Named(self.category.clone()))
        } else if self.categories {
            Some(CategorySelection::FromDescriptions)
        } else {
            None
        };

        ReportOptions {
            status: Some(self.status),
            sort: self.sort.map(|order| match order {
                SortArg::Asc => SortOrder::Ascending,
                SortArg::Desc => SortOrder::Descending,
            }),
            currency,
            search: self.search.clone().filter(|term| !term.trim().is_empty()),
            categories,
        }
    }

    /// Build the rate table from `--rates-file` and `--rate`
    ///
    /// `--rate` values override rates from the file. Returns `None` when no
    /// rates were given, which disables conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate file cannot be read or a rate is invalid.
    pub fn to_rate_table(&self) -> Result<Option<RateTable>, ViewerError> {
        let mut table = match &self.rates_file {
            Some(path) => read_rate_file(path)?,
            None => RateTable::new(),
        };
        table.merge(RateTable::from_specs(&self.rates)?);

        Ok(if table.is_empty() { None } else { Some(table) })
    }
}
