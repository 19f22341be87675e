//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod draft;
mod shift_record;
mod work_summary;

pub use draft::{ShiftChange, ShiftDraft};
pub use shift_record::{MAX_NOTE_LEN, ShiftRecord};
pub use work_summary::WorkSummary;
