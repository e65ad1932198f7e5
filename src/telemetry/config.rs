//! Telemetry generator configuration and the known deployment presets.

use std::ops::Range;

use clap::ValueEnum;

use super::error::{TelemetryConfigError, TelemetryResult};

/// Placeholder reported by deployments that never tracked a start time.
pub const PLACEHOLDER_UPTIME: &str = "02:45:12";

/// How the `uptime` field is produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UptimeMode {
    /// Wall-clock time since the generator was built.
    #[default]
    Elapsed,
    /// A fixed string returned verbatim.
    Fixed(String),
}

/// Named configurations matching the known deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TelemetryPreset {
    /// `Operational`, memory 0..1024 MB, latency 0..50 ms, live uptime
    #[default]
    Standard,
    /// `Operational`, memory 512..1536 MB, latency 10..60 ms, live uptime
    Provisioned,
    /// `OPERATIONAL`, memory 0..1024 MB, latency 0..50 ms, fixed uptime
    Placeholder,
}

/// Parameters of a [`TelemetryGenerator`](super::TelemetryGenerator).
///
/// Ranges are half-open: `min` is inclusive, `max` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub status_label: String,
    pub memory_mb: Range<u32>,
    pub latency_ms: Range<u32>,
    pub uptime: UptimeMode,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::preset(TelemetryPreset::Standard)
    }
}

impl TelemetryConfig {
    pub fn preset(preset: TelemetryPreset) -> Self {
        match preset {
            TelemetryPreset::Standard => Self {
                status_label: "Operational".to_string(),
                memory_mb: 0..1024,
                latency_ms: 0..50,
                uptime: UptimeMode::Elapsed,
            },
            TelemetryPreset::Provisioned => Self {
                status_label: "Operational".to_string(),
                memory_mb: 512..1536,
                latency_ms: 10..60,
                uptime: UptimeMode::Elapsed,
            },
            TelemetryPreset::Placeholder => Self {
                status_label: "OPERATIONAL".to_string(),
                memory_mb: 0..1024,
                latency_ms: 0..50,
                uptime: UptimeMode::Fixed(PLACEHOLDER_UPTIME.to_string()),
            },
        }
    }

    pub fn with_status_label(mut self, label: impl Into<String>) -> Self {
        self.status_label = label.into();
        self
    }

    pub fn with_memory_mb(mut self, range: Range<u32>) -> Self {
        self.memory_mb = range;
        self
    }

    pub fn with_latency_ms(mut self, range: Range<u32>) -> Self {
        self.latency_ms = range;
        self
    }

    pub fn with_uptime(mut self, uptime: UptimeMode) -> Self {
        self.uptime = uptime;
        self
    }

    /// Check that both ranges are non-empty and the label is not blank.
    pub fn validate(&self) -> TelemetryResult<()> {
        if self.status_label.trim().is_empty() {
            return Err(TelemetryConfigError::BlankStatusLabel);
        }
        check_range("memory_mb", &self.memory_mb)?;
        check_range("latency_ms", &self.latency_ms)
    }
}

fn check_range(name: &'static str, range: &Range<u32>) -> TelemetryResult<()> {
    if range.is_empty() {
        return Err(TelemetryConfigError::EmptyRange {
            name,
            min: range.start,
            max: range.end,
        });
    }
    Ok(())
}
