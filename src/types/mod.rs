//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `record`: Transaction record wrapper and status vocabulary
//! - `error`: Error types for the viewer

pub mod error;
pub mod record;

pub use error::{IdentifierKind, ViewerError};
pub use record::{RawFields, Record, Status};
