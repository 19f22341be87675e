//! Pay calculation functionality.
//!
//! This module splits worked hours into regular and overtime portions at the
//! daily threshold and prices the split under a rate schedule. Overtime hours
//! are paid at the base hourly rate scaled by the overtime multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateSchedule;

/// Default daily overtime threshold in hours.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default overtime pay multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The result of pricing a shift's worked hours under a rate schedule.
///
/// Contains the split between regular and overtime hours along with the
/// total pay for the shift.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::PayBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PayBreakdown {
///     regular_hours: Decimal::from_str("8").unwrap(),
///     overtime_hours: Decimal::from_str("2").unwrap(),
///     pay: Decimal::from_str("154").unwrap(),
/// };
/// assert_eq!(breakdown.regular_hours + breakdown.overtime_hours, Decimal::from_str("10").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours up to the overtime threshold.
    pub regular_hours: Decimal,
    /// Hours exceeding the overtime threshold.
    pub overtime_hours: Decimal,
    /// Total pay: regular hours at the base rate plus overtime hours at the
    /// base rate scaled by the multiplier.
    pub pay: Decimal,
}

/// Prices worked hours under the given rate schedule.
///
/// Splits `total_hours` at the schedule's overtime threshold: hours up to
/// the threshold pay the base hourly rate, hours beyond it pay the base rate
/// times the overtime multiplier. The split is exact, with
/// `regular_hours + overtime_hours == total_hours` always.
///
/// # Arguments
///
/// * `total_hours` - The total hours worked in the shift
/// * `schedule` - The rate schedule with hourly rate, threshold, and multiplier
///
/// # Examples
///
/// ## Shift exceeding the threshold
///
/// ```
/// use timesheet_engine::calculation::calculate_pay;
/// use timesheet_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = RateSchedule {
///     hourly_rate: Decimal::from_str("14").unwrap(),
///     overtime_threshold_hours: Decimal::from_str("8").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
///
/// let breakdown = calculate_pay(Decimal::from_str("10").unwrap(), &schedule);
///
/// assert_eq!(breakdown.regular_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(breakdown.overtime_hours, Decimal::from_str("2").unwrap());
/// assert_eq!(breakdown.pay, Decimal::from_str("154").unwrap());
/// ```
///
/// ## Shift under the threshold
///
/// ```
/// use timesheet_engine::calculation::calculate_pay;
/// use timesheet_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = RateSchedule {
///     hourly_rate: Decimal::from_str("14").unwrap(),
///     overtime_threshold_hours: Decimal::from_str("8").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
///
/// let breakdown = calculate_pay(Decimal::from_str("6").unwrap(), &schedule);
///
/// assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
/// assert_eq!(breakdown.pay, Decimal::from_str("84").unwrap());
/// ```
pub fn calculate_pay(total_hours: Decimal, schedule: &RateSchedule) -> PayBreakdown {
    let threshold = schedule.overtime_threshold_hours;

    // Regular hours are capped at the threshold
    let regular_hours = if total_hours <= threshold {
        total_hours
    } else {
        threshold
    };

    // Overtime hours are the excess over the threshold
    let overtime_hours = if total_hours > threshold {
        total_hours - threshold
    } else {
        Decimal::ZERO
    };

    let pay = regular_hours * schedule.hourly_rate
        + overtime_hours * schedule.hourly_rate * schedule.overtime_multiplier;

    // Multiplication accumulates scale; serialize in canonical form
    PayBreakdown {
        regular_hours: regular_hours.normalize(),
        overtime_hours: overtime_hours.normalize(),
        pay: pay.normalize(),
    }
}
