//! Sensor reading input validation.
//!
//! [`ReadingInput`] is the shape accepted on the wire. It is validated and
//! resolved into a [`NewReading`] before anything touches storage, so a
//! malformed payload never causes a partial write.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::Timestamp;

/// A telemetry sample as submitted by a sensor.
///
/// `gas_leak` is an integer magnitude (the raw analog reading of the leak
/// sensor), not a boolean flag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReadingInput {
    #[validate(custom(function = "validate_finite"))]
    pub gas_level: f64,
    pub gas_leak: i64,
    /// Sensor-side timestamp. Defaults to ingestion time when absent.
    #[serde(default)]
    pub recorded_at: Option<Timestamp>,
}

/// A validated reading ready to be appended to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub gas_level: f64,
    pub gas_leak: i64,
    pub recorded_at: Timestamp,
}

impl ReadingInput {
    /// Validate the input and resolve the timestamp against `now`.
    pub fn into_new_reading(self, now: Timestamp) -> Result<NewReading, CoreError> {
        self.validate()?;
        Ok(NewReading {
            gas_level: self.gas_level,
            gas_leak: self.gas_leak,
            recorded_at: self.recorded_at.unwrap_or(now),
        })
    }
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        return Ok(());
    }
    Err(ValidationError::new("finite").with_message(Cow::Borrowed("must be a finite number")))
}
