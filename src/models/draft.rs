//! Unvalidated shift input.
//!
//! Drafts carry raw client-supplied fields into the store, which parses and
//! validates them before any record is touched. Keeping the fields as plain
//! strings lets validation failures name the offending field exactly as the
//! client sent it.

use serde::{Deserialize, Serialize};

/// Raw input for creating a new shift entry.
///
/// All fields arrive as uninterpreted text: the store parses `date` as
/// `YYYY-MM-DD` and the times as `HH:MM`, rejecting the draft with a
/// validation error before anything is written if parsing fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// Calendar date of the shift, `YYYY-MM-DD`.
    pub date: String,
    /// Clock start time, `HH:MM`.
    pub start: String,
    /// Clock end time, `HH:MM`. May be before `start` for overnight shifts.
    pub end: String,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Raw input for editing an existing shift entry.
///
/// The entry key `(owner, date)` is addressed separately; a change only
/// carries the mutable fields. The note is always replaced with the given
/// value, including `None` to clear it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftChange {
    /// New clock start time, `HH:MM`.
    pub start: String,
    /// New clock end time, `HH:MM`.
    pub end: String,
    /// Replacement note, or `None` to clear any existing note.
    pub note: Option<String>,
}
