use std::sync::Arc;
use axum::{
    Json,
    extract::{rejection::BytesRejection, State},
};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::AppState;
use crate::error::{ContactError, SEND_SUCCESS_MESSAGE};
use crate::handlers::contact_dtos::ContactRequest;
use crate::utils::email_template;

/// POST /api/contact
///
/// The body is read raw, and even an unreadable or oversized body is taken as a value, so
/// that every broken payload ends up in the same generic failure response as a relay error
/// instead of an extractor rejection.
pub async fn send_contact_email(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ContactError> {
    let body = body?;
    let request: ContactRequest = serde_json::from_slice(&body)?;
    let validated = request.validate()?;

    tracing::info!("Contact form submission received from {}", validated.email);

    let message = email_template::compose(&state.config.mail, &validated)?;
    state.mailer.send(message).await?;

    Ok(Json(json!({ "message": SEND_SUCCESS_MESSAGE })))
}
