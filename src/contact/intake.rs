//! Contact intake handler.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::error::ContactResult;
use super::receipt::ContactReceipt;
use super::submission::ContactSubmission;

/// Delay applied before acknowledging, in place of downstream work that does not exist.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Validates contact submissions and issues receipts.
///
/// Acknowledgment only: accepted submissions are logged and dropped.
#[derive(Debug, Clone)]
pub struct ContactIntake {
    simulated_latency: Duration,
}

impl Default for ContactIntake {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_LATENCY)
    }
}

impl ContactIntake {
    pub fn new(simulated_latency: Duration) -> Self {
        Self { simulated_latency }
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }

    /// Validate `body` and issue a receipt for the current time.
    pub fn handle(&self, body: &[u8]) -> ContactResult<ContactReceipt> {
        self.handle_at(body, Utc::now())
    }

    /// Validate `body` and issue a receipt stamped with `now`.
    pub fn handle_at(&self, body: &[u8], now: DateTime<Utc>) -> ContactResult<ContactReceipt> {
        let submission = validate(body)?;
        Ok(receipt_for(&submission, now))
    }

    /// Validate `body`, wait out the simulated latency, then issue a receipt.
    ///
    /// The wait is a timer, so it does not hold up other requests on the runtime.
    pub async fn acknowledge(&self, body: &[u8]) -> ContactResult<ContactReceipt> {
        let submission = validate(body)?;
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
        Ok(receipt_for(&submission, Utc::now()))
    }
}

fn validate(body: &[u8]) -> ContactResult<ContactSubmission> {
    ContactSubmission::from_json(body)
        .inspect_err(|e| warn!(error = %e, "Contact submission rejected"))
}

fn receipt_for(submission: &ContactSubmission, now: DateTime<Utc>) -> ContactReceipt {
    let receipt = ContactReceipt::issue(now);
    info!(
        transaction_id = %receipt.transaction_id,
        project_type = %submission.project_type,
        "Contact submission acknowledged"
    );
    receipt
}
