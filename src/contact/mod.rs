//! Contact form intake.
//!
//! This is an acknowledgment-only stub: submissions are parsed, validated and
//! answered with a receipt, but nothing is persisted or forwarded anywhere.

mod error;
mod intake;
mod receipt;
mod submission;


pub use error::{ContactError, ContactResult};
pub use intake::{ContactIntake, DEFAULT_SIMULATED_LATENCY};
pub use receipt::{ACKNOWLEDGMENT_MESSAGE, ContactReceipt, TRANSACTION_PREFIX};
pub use submission::{ContactForm, ContactSubmission};
