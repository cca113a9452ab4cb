//! Error types for the transaction viewer
//!
//! Only boundary failures and explicit validation utilities produce errors.
//! Malformed record data never does: the display path degrades instead.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, unreadable file, unsupported extension
//! - **Parsing Errors**: Malformed CSV or JSON documents
//! - **Validation Errors**: Strict card/account masking, card number ranges
//! - **Configuration Errors**: Malformed exchange rates

use std::fmt;
use thiserror::Error;

/// Kind of identifier handed to a strict masking utility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Card,
    Account,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Card => f.write_str("card number"),
            IdentifierKind::Account => f.write_str("account number"),
        }
    }
}

/// Main error type for the transaction viewer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// File not found at the specified path
    ///
    /// Fatal: the report cannot be produced without input.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input document could not be parsed
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// No reader exists for the file's extension
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat {
        /// The offending path
        path: String,
    },

    /// A strict masking utility was given a malformed identifier
    ///
    /// Cards need exactly 16 digits, accounts at least 4 digits.
    #[error("Invalid {kind} format: '{value}'")]
    InvalidIdentifierFormat {
        /// What the value was asserted to be
        kind: IdentifierKind,
        /// The rejected value
        value: String,
    },

    /// Invalid bounds for the card number generator
    #[error("Invalid range: {message}")]
    InvalidRange {
        /// Which bound was violated
        message: String,
    },

    /// Malformed exchange rate configuration
    #[error("Invalid exchange rate '{spec}'")]
    InvalidRate {
        /// The rejected rate specification
        spec: String,
    },
}

impl From<std::io::Error> for ViewerError {
    fn from(error: std::io::Error) -> Self {
        ViewerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ViewerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ViewerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return ViewerError::IoError {
                message: error.to_string(),
            };
        }

        ViewerError::ParseError {
            line: Some(error.line() as u64),
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ViewerError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ViewerError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an UnsupportedFormat error
    pub fn unsupported_format(path: &str) -> Self {
        ViewerError::UnsupportedFormat {
            path: path.to_string(),
        }
    }

    /// Create an InvalidIdentifierFormat error
    pub fn invalid_identifier(kind: IdentifierKind, value: &str) -> Self {
        ViewerError::InvalidIdentifierFormat {
            kind,
            value: value.to_string(),
        }
    }

    /// Create an InvalidRange error
    pub fn invalid_range(message: &str) -> Self {
        ViewerError::InvalidRange {
            message: message.to_string(),
        }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(spec: &str) -> Self {
        ViewerError::InvalidRate {
            spec: spec.to_string(),
        }
    }
}
