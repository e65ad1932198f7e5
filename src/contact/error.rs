//! Contact intake error types.

use miette::Diagnostic;
use thiserror::Error;

/// Reasons a contact submission is rejected.
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("Malformed request: {message}")]
    #[diagnostic(
        code(adam::contact::malformed_request),
        help("Send a JSON object with name, email, project_type, budget and message")
    )]
    MalformedRequest { message: String },

    #[error("Field '{field}' {reason}")]
    #[diagnostic(code(adam::contact::validation))]
    Validation { field: &'static str, reason: String },
}

impl ContactError {
    pub(crate) fn required(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "is required".to_string(),
        }
    }

    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::MalformedRequest { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(e: serde_json::Error) -> Self {
        ContactError::MalformedRequest {
            message: e.to_string(),
        }
    }
}

/// Result type for contact intake.
pub type ContactResult<T> = Result<T, ContactError>;
