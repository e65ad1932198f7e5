//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, ErrorResponse, HealthResponse};
use super::state::AppState;
use crate::contact::{ContactForm, ContactReceipt};
use crate::telemetry::SystemStatus;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ADAM Telemetry API",
        version = "0.1.0",
        description = "Synthetic system telemetry and contact intake"
    ),
    paths(handlers::health, handlers::telemetry, handlers::submit_contact),
    components(schemas(
        HealthResponse,
        SystemStatus,
        ContactForm,
        ContactReceipt,
        ErrorResponse,
    )),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "telemetry", description = "Synthetic telemetry endpoints"),
        (name = "contact", description = "Contact form intake")
    )
)]
pub struct ApiDoc;

/// Create the API router.
///
/// With `cors` set, every route gets the layer and OPTIONS preflights are
/// answered before reaching a handler. `/docs` is only mounted when
/// `enable_docs` is true.
pub fn create_router(state: AppState, cors: Option<CorsLayer>, enable_docs: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/telemetry", get(handlers::telemetry))
        .route("/v1/contact", post(handlers::submit_contact))
        .with_state(state);

    if enable_docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    match cors {
        Some(layer) => router.layer(layer),
        None => router,
    }
}
