//! Request types for the Shift Recording Engine API.
//!
//! This module defines the JSON request structures for the entry endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftChange, ShiftDraft};

/// Request body for creating a shift entry.
///
/// Clients may include `total_hours`, `overtime_hours`, and `pay`; those
/// fields are advisory only and are dropped during conversion. The engine
/// recomputes every derived value from the clock times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    /// The calendar date of the shift, `YYYY-MM-DD`.
    pub date: String,
    /// The clock start time, `HH:MM`.
    pub start: String,
    /// The clock end time, `HH:MM`.
    pub end: String,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
    /// Client-computed total hours; ignored.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Client-computed overtime hours; ignored.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Client-computed pay; ignored.
    #[serde(default)]
    pub pay: Option<Decimal>,
}

/// Request body for updating a shift entry.
///
/// The entry is addressed by the owner and date in the URL; the body only
/// carries the replacement times and note. Advisory derived fields are
/// accepted and dropped, as for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    /// The new clock start time, `HH:MM`.
    pub start: String,
    /// The new clock end time, `HH:MM`.
    pub end: String,
    /// Replacement note; omitting it clears any existing note.
    #[serde(default)]
    pub note: Option<String>,
    /// Client-computed total hours; ignored.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Client-computed overtime hours; ignored.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Client-computed pay; ignored.
    #[serde(default)]
    pub pay: Option<Decimal>,
}

impl From<CreateEntryRequest> for ShiftDraft {
    fn from(req: CreateEntryRequest) -> Self {
        ShiftDraft {
            date: req.date,
            start: req.start,
            end: req.end,
            note: req.note,
        }
    }
}

impl From<UpdateEntryRequest> for ShiftChange {
    fn from(req: UpdateEntryRequest) -> Self {
        ShiftChange {
            start: req.start,
            end: req.end,
            note: req.note,
        }
    }
}
