//! Calculation logic for the Shift Recording Engine.
//!
//! This module contains the pure calculation functions for determining
//! worked hours and pay: clock-time duration with overnight wraparound,
//! and the regular/overtime split priced under a rate schedule.

mod duration;
mod pay;

pub use duration::{MINUTES_PER_DAY, calculate_total_hours};
pub use pay::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, PayBreakdown, calculate_pay,
};
