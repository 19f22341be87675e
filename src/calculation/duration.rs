//! Shift duration calculation functionality.
//!
//! This module computes the worked hours between two wall-clock times,
//! treating an end time at or before the start time as belonging to the
//! following day. Durations are exact decimal hours derived from whole
//! minutes, never floating point.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Number of minutes in a full clock day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calculates the worked hours between two clock times.
///
/// Times carry no date: when `end` is numerically earlier than `start` the
/// shift is taken to wrap past midnight into the next day. Equal times
/// produce a zero-hour shift, not a 24-hour one. Seconds are disregarded;
/// durations are whole minutes converted to decimal hours.
///
/// The result is always at least zero and strictly less than 24.
///
/// # Arguments
///
/// * `start` - The wall-clock start time
/// * `end` - The wall-clock end time, possibly on the following day
///
/// # Examples
///
/// ## Ordinary day shift
///
/// ```
/// use timesheet_engine::calculation::calculate_total_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
///
/// assert_eq!(calculate_total_hours(start, end), Decimal::from_str("8").unwrap());
/// ```
///
/// ## Shift crossing midnight
///
/// ```
/// use timesheet_engine::calculation::calculate_total_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
///
/// assert_eq!(calculate_total_hours(start, end), Decimal::from_str("4").unwrap());
/// ```
///
/// ## Zero-length shift
///
/// ```
/// use timesheet_engine::calculation::calculate_total_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
///
/// assert_eq!(calculate_total_hours(start, start), Decimal::ZERO);
/// ```
pub fn calculate_total_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let start_minutes = i64::from(start.hour()) * 60 + i64::from(start.minute());
    let end_minutes = i64::from(end.hour()) * 60 + i64::from(end.minute());

    let worked_minutes = if end_minutes >= start_minutes {
        end_minutes - start_minutes
    } else {
        // Shift wraps past midnight into the next day
        MINUTES_PER_DAY - start_minutes + end_minutes
    };

    Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
}
