//! Redaction of supplier cell values in logs.
//!
//! Row-level values are only logged when explicitly enabled (`--log-data`).

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enables or disables row-level value logging for the process.
pub fn set_log_data(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
