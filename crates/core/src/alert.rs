//! Leak alert rule and alert payload.
//!
//! Pure logic: the caller persists the reading first and passes the stored
//! values in, so the decision is always made on a committed row.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Leak signal magnitude above which an alert is raised. Strictly greater
/// than: a reading of exactly this value does not alert.
pub const LEAK_ALERT_THRESHOLD: i64 = 500;

/// Returns `true` when `gas_leak` is above [`LEAK_ALERT_THRESHOLD`].
pub fn exceeds_leak_threshold(gas_leak: i64) -> bool {
    gas_leak > LEAK_ALERT_THRESHOLD
}

/// A leak detected on a stored reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeakAlert {
    pub reading_id: DbId,
    pub gas_level: f64,
    pub gas_leak: i64,
    pub recorded_at: Timestamp,
}

impl LeakAlert {
    /// Evaluate a stored reading. Returns `None` when no alert is due.
    pub fn evaluate(
        reading_id: DbId,
        gas_level: f64,
        gas_leak: i64,
        recorded_at: Timestamp,
    ) -> Option<Self> {
        exceeds_leak_threshold(gas_leak).then_some(Self {
            reading_id,
            gas_level,
            gas_leak,
            recorded_at,
        })
    }

    /// Render the outbound message text, prefixed with the configured body.
    pub fn message(&self, prefix: &str) -> String {
        format!(
            "{prefix} Leak signal {} (reading #{}).",
            self.gas_leak, self.reading_id
        )
    }
}
