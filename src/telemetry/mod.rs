//! Synthetic system telemetry.
//!
//! The generator fabricates a status record on every call. None of the figures
//! are measured: CPU load, memory and latency are drawn from a non-cryptographic
//! random source inside configured bounds, and uptime is derived from the
//! instant the generator was built.

mod config;
mod error;
mod generator;
mod uptime;

#[cfg(test)]
mod generator_test;

pub use config::{TelemetryConfig, TelemetryPreset, UptimeMode};
pub use error::{TelemetryConfigError, TelemetryResult};
pub use generator::{SystemStatus, TelemetryGenerator};
pub use uptime::format_uptime;
