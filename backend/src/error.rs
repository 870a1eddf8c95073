use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const SEND_SUCCESS_MESSAGE: &str = "E-Mail erfolgreich gesendet";
pub const SEND_FAILURE_MESSAGE: &str = "Fehler beim Senden der E-Mail";

/// Everything that can go wrong between receiving a contact form and handing it to the relay.
/// The caller only ever sees [`SEND_FAILURE_MESSAGE`]; the variant is for the logs.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("could not read request body: {0}")]
    Body(#[from] axum::extract::rejection::BytesRejection),

    #[error("invalid request body: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("invalid field {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("mail relay is not configured, missing {0}")]
    MissingConfig(&'static str),

    #[error("invalid email address {address}: {source}")]
    Address {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl ContactError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ContactError::Validation { field, reason: reason.into() }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to send contact email: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": SEND_FAILURE_MESSAGE })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn every_variant_maps_to_the_same_generic_response() {
        let errors = vec![
            ContactError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
            ContactError::validation("email", "must not be empty"),
            ContactError::MissingConfig("EMAIL_PASS"),
        ];

        for error in errors {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = response.into_body().collect().await.unwrap().to_bytes();
            let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body, json!({ "message": SEND_FAILURE_MESSAGE }));
        }
    }

    #[test]
    fn display_keeps_the_detail_for_logs() {
        let error = ContactError::MissingConfig("EMAIL_HOST");
        assert_eq!(error.to_string(), "mail relay is not configured, missing EMAIL_HOST");
    }
}
