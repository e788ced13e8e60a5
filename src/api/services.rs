use axum::{
    body::Body,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};
use tracing::{debug, info};

use super::{
    error::ApiError,
    models::{ContactResponse, ContactsResponse},
    state::AppState,
    utils::{decode_contact, json_response, parse_contact_id, read_body},
    validation::validate_contact,
};

/// Root greeting (any method on /)
pub async fn greeting() -> &'static str {
    "hello!"
}

/// List every contact in insertion order (GET /contacts)
pub async fn list_contacts(State(state): State<AppState>) -> Result<Response, ApiError> {
    let contacts = state.store.all().await;
    debug!(count = contacts.len(), "Listing contacts");

    json_response(StatusCode::OK, &ContactsResponse::ok(contacts))
}

/// Create a contact (POST /contacts)
///
/// The decoded record is stored exactly as received, client-supplied id
/// included. Duplicate ids are accepted. When `api.validate_contacts` is set
/// the record must pass [`validate_contact`] first.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Body,
) -> Result<Response, ApiError> {
    let data = read_body(body, state.config.api.max_payload_bytes).await?;
    let contact = decode_contact(&data)?;

    if state.config.api.validate_contacts {
        validate_contact(&contact)?;
    }

    let total = state.store.append(contact.clone()).await;
    state.metrics.contact_created();
    info!(id = contact.id, total, "Contact created");

    json_response(StatusCode::CREATED, &ContactResponse::ok(contact))
}

/// Fetch a contact by id (GET /contacts/{id})
///
/// With duplicate ids the earliest stored record wins. A segment that does not
/// percent-decode to UTF-8 is an invalid id like any other non-integer.
pub async fn get_contact(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(raw_id) = raw_id.map_err(|rejection| {
        debug!(error = %rejection, "Rejecting contact id segment");
        ApiError::InvalidId
    })?;
    let id = parse_contact_id(&raw_id)?;

    match state.store.find(id).await {
        Some(contact) => {
            state.metrics.lookup_hit();
            json_response(StatusCode::OK, &ContactResponse::ok(contact))
        }
        None => {
            state.metrics.lookup_missed();
            debug!(id, "Contact not found");
            Err(ApiError::NotFound)
        }
    }
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}
