//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording shifts and
//! calculating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate schedule contained an out-of-range value.
    ///
    /// Reported when configuration is loaded, never per calculation call.
    #[error("Invalid rate schedule field '{field}': {message}")]
    InvalidSchedule {
        /// The schedule field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift entry field was malformed or out of bounds.
    #[error("Invalid entry field '{field}': {message}")]
    InvalidEntry {
        /// The entry field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An entry already exists for the given owner and date.
    ///
    /// Raised by `add`; the stored entry is never silently overwritten.
    #[error("Shift entry already exists for owner '{owner}' on {date}")]
    DuplicateEntry {
        /// The owner the entry belongs to.
        owner: String,
        /// The date that is already taken.
        date: NaiveDate,
    },

    /// No entry exists for the given owner and date.
    ///
    /// Raised by `edit` and `remove`, which act on a caller-asserted
    /// existing key. A point lookup miss is not an error.
    #[error("No shift entry for owner '{owner}' on {date}")]
    EntryNotFound {
        /// The owner the lookup was scoped to.
        owner: String,
        /// The date that had no entry.
        date: NaiveDate,
    },

    /// The backing store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
