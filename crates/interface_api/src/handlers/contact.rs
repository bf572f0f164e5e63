//! Contact handlers
//!
//! Each handler follows the same shape: validate the `data_store` selector,
//! resolve the backend, run exactly one operation against it, and wrap the
//! backend's JSON unchanged. An invalid selector short-circuits to a 400
//! before any backend is contacted.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::debug;

use domain_contact::BackendSelector;

use crate::dto::contact::*;
use crate::{error::ApiError, AppState};

/// Creates a contact in the selected backend
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let selector = BackendSelector::parse(&request.data_store)?;
    debug!(backend = %selector, "Creating contact");

    let body = state
        .backends
        .select(selector)
        .create_contact(request.into_new_contact())
        .await?;

    Ok((StatusCode::CREATED, Json(body)))
}

/// Fetches a contact from the selected backend
pub async fn get_contact(
    State(state): State<AppState>,
    Json(request): Json<GetContactRequest>,
) -> Result<Json<Value>, ApiError> {
    let selector = BackendSelector::parse(&request.data_store)?;
    debug!(backend = %selector, contact_id = %request.contact_id, "Fetching contact");

    let body = state
        .backends
        .select(selector)
        .get_contact(&request.contact_id)
        .await?;

    Ok(Json(body))
}

/// Updates a contact's email and mobile number in the selected backend
pub async fn update_contact(
    State(state): State<AppState>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<Value>, ApiError> {
    let selector = BackendSelector::parse(&request.data_store)?;
    debug!(backend = %selector, contact_id = %request.contact_id, "Updating contact");

    let body = state
        .backends
        .select(selector)
        .update_contact(&request.contact_id, request.changes())
        .await?;

    Ok(Json(body))
}

/// Deletes a contact from the selected backend
pub async fn delete_contact(
    State(state): State<AppState>,
    Json(request): Json<DeleteContactRequest>,
) -> Result<StatusCode, ApiError> {
    let selector = BackendSelector::parse(&request.data_store)?;
    debug!(backend = %selector, contact_id = %request.contact_id, "Deleting contact");

    state
        .backends
        .select(selector)
        .delete_contact(&request.contact_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
