//! System health handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{AppState, HealthInfo};

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "alive")]
    pub status: String,
    /// Implementation serving the request
    #[schema(example = "rust")]
    pub engine: String,
    /// Service version
    #[schema(example = "0.1.0")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Build the health payload. Always reports `alive`.
pub fn check(info: &HealthInfo) -> HealthResponse {
    HealthResponse {
        status: "alive".to_string(),
        engine: info.engine.clone(),
        version: info.version.clone(),
    }
}

/// Health check endpoint
///
/// Returns a static liveness payload
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(check(state.health()))
}
