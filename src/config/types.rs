//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed rate schedule structure that is
//! deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD};
use crate::error::{EngineError, EngineResult};

/// The rate schedule governing pay calculation.
///
/// A schedule carries the base hourly rate, the daily overtime threshold,
/// and the overtime multiplier. The threshold and multiplier fall back to
/// their defaults (8 hours, 1.5x) when omitted from the configuration file.
///
/// Schedules are validated at load time and threaded explicitly through
/// calculation calls; nothing in the engine assumes a global rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateSchedule {
    /// Base pay per hour worked. Must be positive.
    pub hourly_rate: Decimal,
    /// Daily hours above which overtime pay applies. Must be positive.
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    /// Must be at least 1.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_overtime_threshold() -> Decimal {
    DEFAULT_OVERTIME_THRESHOLD
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl RateSchedule {
    /// Checks that every field is within its allowed range.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` for a usable schedule, or `InvalidSchedule` naming
    /// the first offending field:
    /// - `hourly_rate` must be positive
    /// - `overtime_threshold_hours` must be positive
    /// - `overtime_multiplier` must be at least 1
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                field: "hourly_rate".to_string(),
                message: format!("must be positive, got {}", self.hourly_rate),
            });
        }

        if self.overtime_threshold_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                field: "overtime_threshold_hours".to_string(),
                message: format!("must be positive, got {}", self.overtime_threshold_hours),
            });
        }

        if self.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidSchedule {
                field: "overtime_multiplier".to_string(),
                message: format!("must be at least 1, got {}", self.overtime_multiplier),
            });
        }

        Ok(())
    }
}
