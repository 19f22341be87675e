//! HTTP API module for the Shift Recording Engine.
//!
//! This module provides the REST API endpoints for recording shift entries
//! and retrieving their computed hours and pay.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateEntryRequest, UpdateEntryRequest};
pub use response::{ApiError, EntryResponse, MessageResponse, SummaryResponse};
pub use state::AppState;
