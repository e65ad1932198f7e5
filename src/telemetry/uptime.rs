//! Human-readable uptime rendering.

use std::time::Duration;

const HALF_SECOND_NANOS: u32 = 500_000_000;

/// Render a duration as `2h45m12s`, rounded to the nearest second.
///
/// Leading zero units are dropped (`45s`, `3m5s`), but once a larger unit is
/// present every smaller one is printed (`1h0m0s`).
pub fn format_uptime(elapsed: Duration) -> String {
    let mut secs = elapsed.as_secs();
    if elapsed.subsec_nanos() >= HALF_SECOND_NANOS {
        secs += 1;
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
