use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::contact::validation::{validate_contact, ContactRequest};
use crate::errors::AppError;
use crate::state::AppState;

const SEND_FAILED: &str = "Failed to send message";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: &'static str,
    pub id: i32,
}

/// POST /api/contact
/// Validation happens before any write; rejected submissions never reach the store.
pub async fn handle_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(req) = payload.map_err(AppError::failed(SEND_FAILED))?;
    let new_contact = validate_contact(&req).map_err(AppError::failed(SEND_FAILED))?;

    let contact = state
        .store
        .create_contact_message(new_contact)
        .await
        .map_err(AppError::failed(SEND_FAILED))?;

    info!("Contact message {} received", contact.id);

    Ok(Json(ContactResponse {
        message: "Message sent successfully",
        id: contact.id,
    }))
}
