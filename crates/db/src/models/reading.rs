//! Reading entity model.

use gaswatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub gas_level: f64,
    pub gas_leak: i64,
    pub recorded_at: Timestamp,
    pub created_at: Timestamp,
}
