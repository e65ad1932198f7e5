//! Contact submission parsing and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::error::{ContactError, ContactResult};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Contact form body as sent by the client.
///
/// Every field is optional at this stage so that a missing field is reported
/// as a validation failure naming it, rather than as an unparseable body.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ContactForm {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "web")]
    pub project_type: Option<String>,
    #[schema(example = "1000")]
    pub budget: Option<String>,
    #[schema(example = "Hello there")]
    pub message: Option<String>,
}

/// A validated contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

impl ContactSubmission {
    /// Parse and validate a raw JSON body.
    ///
    /// The body must be a JSON object; arrays and scalars are malformed.
    pub fn from_json(body: &[u8]) -> ContactResult<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        let form: ContactForm = serde_json::from_value(Value::Object(object))?;
        Self::try_from(form)
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ContactError;

    fn try_from(form: ContactForm) -> ContactResult<Self> {
        let name = required("name", form.name)?;
        let email = required("email", form.email)?;
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ContactError::Validation {
                field: "email",
                reason: "must be a valid email address".to_string(),
            });
        }
        let project_type = required("project_type", form.project_type)?;
        let budget = required("budget", form.budget)?;
        let message = required("message", form.message)?;

        Ok(Self {
            name,
            email,
            project_type,
            budget,
            message,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> ContactResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ContactError::required(field)),
    }
}
