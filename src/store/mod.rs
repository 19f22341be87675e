//! Shift entry storage for the Shift Recording Engine.
//!
//! This module contains the [`ShiftStore`], the in-memory collection of
//! shift records keyed by owner and date. All validation of raw entry
//! input happens here, before any record is written.

mod shift_store;

pub use shift_store::ShiftStore;
