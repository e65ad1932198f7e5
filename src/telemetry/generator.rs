//! Snapshot generation.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::config::{TelemetryConfig, UptimeMode};
use super::error::TelemetryResult;
use super::uptime::format_uptime;

/// Synthetic status record returned by the telemetry endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    /// Configured status label
    #[schema(example = "Operational")]
    pub status: String,
    /// Time since the service started, or a fixed placeholder
    #[schema(example = "2h45m12s")]
    pub uptime: String,
    /// Fabricated CPU load percentage in [0, 100)
    #[schema(example = 42.7)]
    pub cpu_load: f64,
    /// Fabricated memory usage in megabytes
    #[schema(example = 768)]
    pub memory_mb: u32,
    /// Fabricated latency in milliseconds
    #[schema(example = 23)]
    pub latency_ms: u32,
}

/// Produces [`SystemStatus`] snapshots.
///
/// The start instant is fixed at construction and never changes, so the
/// generator can be shared across request handlers without synchronization.
#[derive(Debug, Clone)]
pub struct TelemetryGenerator {
    config: TelemetryConfig,
    started: Instant,
}

impl TelemetryGenerator {
    /// Build a generator whose uptime counts from now.
    pub fn new(config: TelemetryConfig) -> TelemetryResult<Self> {
        Self::started_at(config, Instant::now())
    }

    /// Build a generator whose uptime counts from `started`.
    pub fn started_at(config: TelemetryConfig, started: Instant) -> TelemetryResult<Self> {
        config.validate()?;
        Ok(Self { config, started })
    }

    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }

    /// Elapsed time since the start instant.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Generate a snapshot using the thread-local random source.
    pub fn generate(&self) -> SystemStatus {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a snapshot drawing figures from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SystemStatus {
        let uptime = match &self.config.uptime {
            UptimeMode::Elapsed => format_uptime(self.uptime()),
            UptimeMode::Fixed(placeholder) => placeholder.clone(),
        };

        SystemStatus {
            status: self.config.status_label.clone(),
            uptime,
            cpu_load: rng.gen_range(0.0..100.0),
            memory_mb: rng.gen_range(self.config.memory_mb.clone()),
            latency_ms: rng.gen_range(self.config.latency_ms.clone()),
        }
    }
}
