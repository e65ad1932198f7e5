//! Contact form handler.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::contact::{ContactForm, ContactReceipt};

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error summary
    #[schema(example = "Invalid request data")]
    pub error: String,
    /// What was wrong with the request
    #[schema(example = "Field 'email' must be a valid email address")]
    pub details: String,
}

/// Submit a contact message
///
/// Validates and acknowledges the submission. Nothing is stored or forwarded.
#[utoipa::path(
    post,
    path = "/v1/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Submission acknowledged", body = ContactReceipt),
        (status = 400, description = "Malformed or invalid submission", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactReceipt>, (StatusCode, Json<ErrorResponse>)> {
    let receipt = state.contact().acknowledge(&body).await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid request data".to_string(),
                details: e.to_string(),
            }),
        )
    })?;

    Ok(Json(receipt))
}
