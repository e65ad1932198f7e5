//! Acknowledgment receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TRANSACTION_PREFIX: &str = "ADAM-";
pub const ACKNOWLEDGMENT_MESSAGE: &str = "Message received successfully";

const TRANSACTION_TIME_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Receipt returned for an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    #[schema(example = true)]
    pub success: bool,
    /// Prefix plus the issue time as `YYYYMMDD-HHMMSS` (UTC)
    #[schema(example = "ADAM-20250101-120000")]
    pub transaction_id: String,
    /// Issue time in Unix seconds
    #[schema(example = 1735732800)]
    pub timestamp: i64,
    #[schema(example = "Message received successfully")]
    pub message: String,
}

impl ContactReceipt {
    /// Issue a receipt stamped with `now`.
    ///
    /// Two receipts issued within the same second share a transaction id.
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            transaction_id: format!(
                "{TRANSACTION_PREFIX}{}",
                now.format(TRANSACTION_TIME_FORMAT)
            ),
            timestamp: now.timestamp(),
            message: ACKNOWLEDGMENT_MESSAGE.to_string(),
        }
    }
}
