//! Telemetry configuration errors.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building a telemetry generator.
///
/// Generation itself never fails; only an inconsistent configuration is rejected.
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum TelemetryConfigError {
    #[error("Empty {name} range: {min}..{max}")]
    #[diagnostic(
        code(adam::telemetry::empty_range),
        help("The lower bound is inclusive and the upper bound exclusive; min must be below max")
    )]
    EmptyRange {
        name: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Status label cannot be blank")]
    #[diagnostic(code(adam::telemetry::blank_status_label))]
    BlankStatusLabel,
}

/// Result type for telemetry configuration.
pub type TelemetryResult<T> = Result<T, TelemetryConfigError>;
