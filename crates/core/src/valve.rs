//! Valve state parsing.
//!
//! The valve endpoint only echoes the requested state back; nothing here
//! drives an actuator or remembers the value.

use crate::error::CoreError;

/// Parse a query-string boolean. Accepts `true`/`false`, `1`/`0`,
/// `yes`/`no` and `on`/`off`, case-insensitive.
pub fn parse_valve_state(raw: &str) -> Result<bool, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(CoreError::Validation(format!(
            "state must be a boolean, got '{raw}'"
        ))),
    }
}
