//! HTTP request handlers for the Shift Recording Engine API.
//!
//! This module contains the handler functions for all entry endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{ShiftChange, ShiftDraft};

use super::request::{CreateEntryRequest, UpdateEntryRequest};
use super::response::{ApiError, ApiErrorResponse, EntryResponse, MessageResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/owners/:owner/entries",
            post(create_entry_handler).get(list_entries_handler),
        )
        .route(
            "/owners/:owner/entries/:date",
            get(get_entry_handler)
                .put(update_entry_handler)
                .delete(delete_entry_handler),
        )
        .route("/owners/:owner/summary", get(summary_handler))
        .with_state(state)
}

/// Handler for POST /owners/:owner/entries.
///
/// Validates the payload, computes the derived fields, and stores the new
/// entry. Responds 201 on success, 409 when an entry already exists for
/// the date.
async fn create_entry_handler(
    State(state): State<AppState>,
    Path(owner): Path<String>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, owner = %owner, "Processing entry creation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Client-computed derived fields are advisory; the store recomputes them
    if request.total_hours.is_some() || request.overtime_hours.is_some() || request.pay.is_some() {
        info!(
            correlation_id = %correlation_id,
            owner = %owner,
            "Ignoring client-supplied derived fields"
        );
    }

    let draft: ShiftDraft = request.into();

    match state.store().add(&owner, draft, state.config().schedule()) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                owner = %owner,
                date = %record.date,
                total_hours = %record.total_hours,
                overtime_hours = %record.overtime_hours,
                pay = %record.pay,
                "Entry created"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(EntryResponse::from(record)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                owner = %owner,
                error = %err,
                "Entry creation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /owners/:owner/entries.
///
/// Returns every entry for the owner, newest date first. An unknown owner
/// yields an empty list.
async fn list_entries_handler(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, owner = %owner, "Processing entry list request");

    match state.store().list(&owner) {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                owner = %owner,
                entry_count = records.len(),
                "Entries listed"
            );
            let entries: Vec<EntryResponse> = records.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(entries),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, owner = %owner, error = %err, "Entry list failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /owners/:owner/entries/:date.
///
/// Point lookup for one entry. A miss is 404; the store itself treats
/// absence as an ordinary outcome and the mapping happens here.
async fn get_entry_handler(
    State(state): State<AppState>,
    Path((owner, date)): Path<(String, String)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, owner = %owner, date = %date, "Processing entry lookup request");

    match state.store().find_by_date(&owner, &date) {
        Ok(Some(record)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(EntryResponse::from(record)),
        )
            .into_response(),
        Ok(None) => {
            info!(correlation_id = %correlation_id, owner = %owner, date = %date, "Entry not found");
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::entry_not_found(&owner, &date)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, owner = %owner, error = %err, "Entry lookup failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for PUT /owners/:owner/entries/:date.
///
/// Replaces the entry's times and note and recomputes the derived fields.
/// The entry's creation timestamp is preserved.
async fn update_entry_handler(
    State(state): State<AppState>,
    Path((owner, date)): Path<(String, String)>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, owner = %owner, date = %date, "Processing entry update request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if request.total_hours.is_some() || request.overtime_hours.is_some() || request.pay.is_some() {
        info!(
            correlation_id = %correlation_id,
            owner = %owner,
            "Ignoring client-supplied derived fields"
        );
    }

    let change: ShiftChange = request.into();

    match state
        .store()
        .edit(&owner, &date, change, state.config().schedule())
    {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                owner = %owner,
                date = %record.date,
                total_hours = %record.total_hours,
                overtime_hours = %record.overtime_hours,
                pay = %record.pay,
                "Entry updated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(EntryResponse::from(record)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                owner = %owner,
                date = %date,
                error = %err,
                "Entry update failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for DELETE /owners/:owner/entries/:date.
///
/// Removes the entry. Repeated deletion of the same entry is 404 every
/// time after the first.
async fn delete_entry_handler(
    State(state): State<AppState>,
    Path((owner, date)): Path<(String, String)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, owner = %owner, date = %date, "Processing entry deletion request");

    match state.store().remove(&owner, &date) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, owner = %owner, date = %date, "Entry deleted");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(MessageResponse {
                    message: "Entry deleted successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                owner = %owner,
                date = %date,
                error = %err,
                "Entry deletion failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /owners/:owner/summary.
///
/// Returns the aggregate totals across the owner's entries.
async fn summary_handler(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, owner = %owner, "Processing summary request");

    match state.store().summary(&owner) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                owner = %owner,
                entry_count = summary.entry_count,
                total_pay = %summary.total_pay,
                "Summary computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(SummaryResponse::new(owner, summary)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, owner = %owner, error = %err, "Summary failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a JSON extraction rejection onto the API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
