//! Telemetry snapshot handler.

use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::api::AppState;
use crate::telemetry::SystemStatus;

/// Get a telemetry snapshot
///
/// Returns fabricated system figures; nothing here is measured
#[utoipa::path(
    get,
    path = "/v1/telemetry",
    tag = "telemetry",
    responses(
        (status = 200, description = "Synthetic system status", body = SystemStatus)
    )
)]
#[instrument(skip(state))]
pub async fn telemetry(State(state): State<AppState>) -> Json<SystemStatus> {
    let snapshot = state.telemetry().generate();
    debug!(uptime = %snapshot.uptime, "Generated telemetry snapshot");
    Json(snapshot)
}
