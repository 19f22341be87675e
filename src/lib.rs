//! Shift Recording and Payroll Calculation Engine
//!
//! This crate records work shifts (a start and end clock time per calendar date,
//! per owner) and derives paid hours from them: total duration with overnight
//! wraparound, the regular/overtime split, and monetary pay under a configurable
//! rate schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
