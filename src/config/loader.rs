//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! schedule from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateSchedule;

/// Loads and provides access to the pay rate schedule.
///
/// The `ConfigLoader` reads a single YAML configuration file and validates
/// the schedule before any calculation can see it.
///
/// # File Structure
///
/// ```text
/// config/payroll.yaml
/// ```
///
/// with contents like:
///
/// ```yaml
/// hourly_rate: "14"
/// overtime_threshold_hours: "8"
/// overtime_multiplier: "1.5"
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("config/payroll.yaml").unwrap();
/// println!("Hourly rate: ${}", loader.schedule().hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads the rate schedule from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "config/payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing a required field
    ///   (`ConfigParseError`)
    /// - Any field is out of range (`InvalidSchedule`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timesheet_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("config/payroll.yaml")?;
    /// # Ok::<(), timesheet_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let schedule = Self::load_yaml::<RateSchedule>(path.as_ref())?;
        schedule.validate()?;

        Ok(Self { schedule })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}
