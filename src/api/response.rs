//! Response types for the Shift Recording Engine API.
//!
//! This module defines the JSON response structures and the error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ShiftRecord, WorkSummary};

/// A stored shift entry as returned on the wire.
///
/// Clock times are rendered as `HH:MM`; the weekday name and the overnight
/// flag are derived from the record on the way out, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryResponse {
    /// Identifier of the owner the entry belongs to.
    pub owner: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The weekday name for the shift date (e.g., "Monday").
    pub day: String,
    /// The clock start time, `HH:MM`.
    pub start: String,
    /// The clock end time, `HH:MM`.
    pub end: String,
    /// Whether the shift crosses midnight.
    pub overnight: bool,
    /// Computed total worked hours.
    pub total_hours: Decimal,
    /// Computed overtime hours.
    pub overtime_hours: Decimal,
    /// Computed pay for the shift.
    pub pay: Decimal,
    /// Free-text note, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The instant the entry was created.
    pub created_at: DateTime<Utc>,
}

impl From<ShiftRecord> for EntryResponse {
    fn from(record: ShiftRecord) -> Self {
        Self {
            day: record.date.format("%A").to_string(),
            start: record.start_time.format("%H:%M").to_string(),
            end: record.end_time.format("%H:%M").to_string(),
            overnight: record.is_overnight(),
            owner: record.owner,
            date: record.date,
            total_hours: record.total_hours,
            overtime_hours: record.overtime_hours,
            pay: record.pay,
            note: record.note,
            created_at: record.created_at,
        }
    }
}

/// Aggregate totals for one owner as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Identifier of the owner the summary covers.
    pub owner: String,
    /// Number of stored entries.
    pub entry_count: usize,
    /// Sum of total worked hours.
    pub total_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of pay.
    pub total_pay: Decimal,
}

impl SummaryResponse {
    /// Builds the wire summary for an owner from the computed totals.
    pub fn new(owner: impl Into<String>, summary: WorkSummary) -> Self {
        Self {
            owner: owner.into(),
            entry_count: summary.entry_count,
            total_hours: summary.total_hours,
            overtime_hours: summary.overtime_hours,
            total_pay: summary.total_pay,
        }
    }
}

/// Plain confirmation message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation text.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an entry not found error response.
    pub fn entry_not_found(owner: &str, date: &str) -> Self {
        Self::with_details(
            "ENTRY_NOT_FOUND",
            format!("No shift entry for owner '{}' on {}", owner, date),
            "No entry is stored for the requested owner and date",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid rate schedule field '{}': {}", field, message),
                    "The loaded rate schedule is unusable",
                ),
            },
            EngineError::InvalidEntry { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid entry field '{}': {}", field, message),
                    "The entry data contains invalid information",
                ),
            },
            EngineError::DuplicateEntry { owner, date } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_ENTRY",
                    format!("Shift entry already exists for owner '{}' on {}", owner, date),
                    "At most one entry may exist per owner per date",
                ),
            },
            EngineError::EntryNotFound { owner, date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::entry_not_found(&owner, &date.to_string()),
            },
            EngineError::Storage { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage error", message),
            },
        }
    }
}
