//! Configuration for the Shift Recording Engine.
//!
//! This module handles loading and validating the pay rate schedule from
//! its YAML configuration file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::RateSchedule;
