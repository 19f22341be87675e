//! Shift record model.
//!
//! This module defines the [`ShiftRecord`] struct, the unit of storage for
//! one recorded work shift together with its derived pay fields.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum length of the free-text note on a shift entry, in characters.
pub const MAX_NOTE_LEN: usize = 200;

/// Represents one recorded work shift for an owner on a calendar date.
///
/// A shift is keyed by `(owner, date)`: for a given owner at most one record
/// exists per date. The `total_hours`, `overtime_hours`, and `pay` fields are
/// derived by the calculator from the clock times and the rate schedule in
/// effect at write time; they are cached results, replaced as a whole on
/// every edit and never supplied independently.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime, Utc};
/// use rust_decimal::Decimal;
///
/// let record = ShiftRecord {
///     owner: "u1".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     total_hours: Decimal::new(80, 1),
///     overtime_hours: Decimal::ZERO,
///     pay: Decimal::new(112, 0),
///     note: None,
///     created_at: Utc::now(),
/// };
/// assert!(!record.is_overnight());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Identifier of the owner the shift belongs to.
    pub owner: String,
    /// The calendar date of the shift; key component alongside `owner`.
    pub date: NaiveDate,
    /// The wall-clock start time (no date, no timezone).
    pub start_time: NaiveTime,
    /// The wall-clock end time; may be numerically before `start_time`
    /// for a shift that crosses midnight.
    pub end_time: NaiveTime,
    /// Derived total worked hours, non-negative.
    pub total_hours: Decimal,
    /// Derived overtime hours, between zero and `total_hours`.
    pub overtime_hours: Decimal,
    /// Derived pay for the shift, non-negative.
    pub pay: Decimal,
    /// Optional free-text note, at most [`MAX_NOTE_LEN`] characters.
    pub note: Option<String>,
    /// The instant the record was created; immutable thereafter.
    pub created_at: DateTime<Utc>,
}

impl ShiftRecord {
    /// Returns the day of the week for the shift date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true if the shift crosses midnight.
    ///
    /// An end time numerically before the start time is interpreted as
    /// ending on the following day, never as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::ShiftRecord;
    /// use chrono::{NaiveDate, NaiveTime, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let record = ShiftRecord {
    ///     owner: "u1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
    ///     total_hours: Decimal::new(40, 1),
    ///     overtime_hours: Decimal::ZERO,
    ///     pay: Decimal::new(56, 0),
    ///     note: None,
    ///     created_at: Utc::now(),
    /// };
    /// assert!(record.is_overnight());
    /// ```
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }
}
