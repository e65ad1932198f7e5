//! Application state for the API server.

use std::sync::Arc;

use crate::contact::ContactIntake;
use crate::telemetry::TelemetryGenerator;

/// Identity reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthInfo {
    pub engine: String,
    pub version: Option<String>,
}

impl Default for HealthInfo {
    fn default() -> Self {
        Self {
            engine: "rust".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// Shared application state.
///
/// Everything inside is immutable once built, so cloning per request only
/// bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    telemetry: Arc<TelemetryGenerator>,
    contact: Arc<ContactIntake>,
    health: Arc<HealthInfo>,
}

impl AppState {
    pub fn new(telemetry: TelemetryGenerator, contact: ContactIntake, health: HealthInfo) -> Self {
        Self {
            telemetry: Arc::new(telemetry),
            contact: Arc::new(contact),
            health: Arc::new(health),
        }
    }

    /// Get a reference to the telemetry generator.
    pub fn telemetry(&self) -> &TelemetryGenerator {
        &self.telemetry
    }

    /// Get a reference to the contact intake handler.
    pub fn contact(&self) -> &ContactIntake {
        &self.contact
    }

    /// Get a reference to the health identity.
    pub fn health(&self) -> &HealthInfo {
        &self.health
    }
}
