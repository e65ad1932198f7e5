//! Synthetic telemetry service.
//!
//! Serves a fabricated system-status snapshot, a liveness probe and an
//! acknowledgment-only contact form intake over HTTP.

pub mod api;
pub mod contact;
pub mod telemetry;
